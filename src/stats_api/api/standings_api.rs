//! Standings and division accessors

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::models::{Division, DivisionsResponse, StandingsRecord, StandingsResponse};

use super::fetch_utils::fetch;
use super::urls::{build_division_url, build_standings_url};

/// Fetches league standings, one record per division, in API order.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    league_id: i64,
) -> Result<Vec<StandingsRecord>, AppError> {
    let url = build_standings_url(&config.api_domain, league_id);
    let response: StandingsResponse = fetch(client, &url).await?;

    if response.records.is_empty() {
        return Err(AppError::api_no_data(
            format!("No standings records for league {league_id}"),
            url,
        ));
    }

    info!(
        "Fetched {} division records for league {}",
        response.records.len(),
        league_id
    );
    Ok(response.records)
}

/// Fetches division info, unwrapping the single-element envelope.
#[instrument(skip(client, config))]
pub async fn fetch_division(
    client: &Client,
    config: &Config,
    division_id: i64,
) -> Result<Division, AppError> {
    let url = build_division_url(&config.api_domain, division_id);
    let response: DivisionsResponse = fetch(client, &url).await?;

    response.divisions.into_iter().next().ok_or_else(|| {
        AppError::api_no_data(format!("No division with id {division_id}"), url)
    })
}
