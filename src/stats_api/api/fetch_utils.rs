//! Generic HTTP fetching utilities with retry logic and error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Performs one GET with retry for transient failures and maps non-success
/// statuses to specific error variants. Returns the raw response body.
///
/// Retries cover connect errors, timeouts, HTTP 429 and 5xx, up to the fixed
/// attempt budget with exponential backoff; a `Retry-After` header on 429 is
/// honored. Anything else propagates immediately.
#[instrument(skip(client))]
pub(super) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    debug!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let max_retries = retry::MAX_ATTEMPTS;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error()) && attempt < max_retries {
                    // Respect Retry-After if provided
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < max_retries {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            500..=599 => {
                if status_code == 502 || status_code == 503 {
                    AppError::api_service_unavailable(status_code, reason, url)
                } else {
                    AppError::api_server_error(status_code, reason, url)
                }
            }
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    Ok(response_text)
}

/// Fetches a JSON endpoint and deserializes it into the endpoint's typed
/// record, classifying failures as malformed payload vs unexpected structure.
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let response_text = fetch_text(client, url).await?;

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_payload(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches an XML endpoint (the news feed) and deserializes it with
/// quick-xml. Shape failures propagate as feed parse errors.
pub(super) async fn fetch_xml<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, AppError> {
    let response_text = fetch_text(client, url).await?;

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    quick_xml::de::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse feed XML: {} (URL: {})", e, url);
        AppError::FeedParse(e)
    })
}
