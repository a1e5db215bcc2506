//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Creates the long-lived HTTP client shared by all outbound calls.
///
/// Redirects are disabled: the Stats API never redirects, and team news
/// feeds are addressed by path substitution instead of following the
/// feed's redirect.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .redirect(Policy::none())
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
