//! Division standings view-model

use futures::future::join_all;
use reqwest::Client;
use tracing::instrument;

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::api::{fetch_division, fetch_team, team_logo_url};
use crate::stats_api::models::StandingsRecord;

use super::format::{display_or_missing, team_slug};

/// Standings table for one division: one row per team, in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionStandings {
    /// Short division name, e.g. "AL East"
    pub name: String,
    pub teams: Vec<DivisionTeamRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionTeamRow {
    pub team_id: i64,
    pub abbreviation: String,
    /// Lowercase squashed short name, e.g. "bluejays"
    pub team_name: String,
    pub logo: String,
    pub wins: i64,
    pub losses: i64,
    pub pct: String,
    pub games_back: String,
    /// Last-10 record, e.g. "7-3"
    pub last_ten: String,
    pub run_diff: i64,
}

/// Builds the standings view for the division at `division_idx` within a
/// league's standings records. Per-team lookups fan out concurrently; rows
/// come back in the API's ordering.
#[instrument(skip(client, config, standings))]
pub async fn division_standings(
    client: &Client,
    config: &Config,
    standings: &[StandingsRecord],
    division_idx: usize,
) -> Result<DivisionStandings, AppError> {
    let record = standings.get(division_idx).ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("No standings record at index {division_idx}"),
            "standings",
        )
    })?;

    let division = fetch_division(client, config, record.division.id).await?;

    let lookups = record
        .team_records
        .iter()
        .map(|team_record| fetch_team(client, config, team_record.team.id));
    let teams = join_all(lookups).await;

    let mut rows = Vec::with_capacity(record.team_records.len());
    for (team_record, team) in record.team_records.iter().zip(teams) {
        let team = team?;

        let last_ten = team_record
            .records
            .split_records
            .iter()
            .find(|split| split.record_type == "lastTen")
            .map(|split| format!("{}-{}", split.wins, split.losses))
            .ok_or_else(|| {
                AppError::api_unexpected_structure(
                    format!("Team {} has no lastTen split record", team_record.team.id),
                    "standings",
                )
            })?;

        rows.push(DivisionTeamRow {
            team_id: team_record.team.id,
            abbreviation: team.abbreviation,
            team_name: team_slug(&team.team_name),
            logo: team_logo_url(team_record.team.id),
            wins: team_record.wins,
            losses: team_record.losses,
            pct: team_record.winning_percentage.clone(),
            games_back: display_or_missing(team_record.wild_card_games_back.clone()),
            last_ten,
            run_diff: team_record.runs_scored - team_record.runs_allowed,
        });
    }

    Ok(DivisionStandings {
        name: division.name_short,
        teams: rows,
    })
}
