//! Team info and roster accessors

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::models::{RosterEntry, RosterResponse, Team, TeamsResponse};

use super::fetch_utils::fetch;
use super::urls::{build_roster_url, build_team_url};

/// Fetches team info, unwrapping the single-element envelope.
#[instrument(skip(client, config))]
pub async fn fetch_team(client: &Client, config: &Config, team_id: i64) -> Result<Team, AppError> {
    let url = build_team_url(&config.api_domain, team_id);
    let response: TeamsResponse = fetch(client, &url).await?;

    response
        .teams
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data(format!("No team with id {team_id}"), url))
}

/// Fetches the active roster for a team, in API order.
#[instrument(skip(client, config))]
pub async fn fetch_roster(
    client: &Client,
    config: &Config,
    team_id: i64,
) -> Result<Vec<RosterEntry>, AppError> {
    let url = build_roster_url(&config.api_domain, team_id);
    let response: RosterResponse = fetch(client, &url).await?;

    if response.roster.is_empty() {
        return Err(AppError::api_no_data(
            format!("Empty roster for team {team_id}"),
            url,
        ));
    }

    info!(
        "Fetched {} roster entries for team {}",
        response.roster.len(),
        team_id
    );
    Ok(response.roster)
}
