//! Player page view-models: profile, season stat selection, career table

use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::constants::UNDRAFTED;
use crate::error::AppError;
use crate::stats_api::api::{fetch_person, fetch_person_with_stats, player_headshot_2x_url};
use crate::stats_api::cache::SessionCache;
use crate::stats_api::models::{Person, StatGroup};

use super::format::{
    display_or_missing, hand_code, normalize_height, position_abbreviation,
};

/// Player profile block for the player page header.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub id: i64,
    pub name: String,
    pub photo: String,
    pub position: String,
    pub bat_side: String,
    pub pitch_hand: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub draft_year: String,
}

/// Stat mapping selected for one season, plus the season actually shown
/// when it differs from the one requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonStats {
    pub stats: HashMap<String, Value>,
    pub last_played: Option<String>,
}

/// One row of the career table: a season split in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerRow {
    pub season: String,
    /// Team attribution; absent on combined multi-team totals
    pub team: Option<String>,
    pub stats: HashMap<String, Value>,
}

/// Selects the stat line to show for a requested season.
///
/// Only the first split is checked for a requested-season total; any other
/// shape, including a team-attributed row for the requested season, falls
/// through to the most recent split, whose season is reported as the one
/// actually shown. A player with no history yields an empty mapping.
pub fn season_stats(person: &Person, season: &str) -> SeasonStats {
    let splits = person
        .stats
        .as_deref()
        .and_then(|groups| groups.first())
        .map(|group| group.splits.as_slice())
        .unwrap_or_default();

    let Some(first) = splits.first() else {
        return SeasonStats::default();
    };

    if first.season == season && first.team.is_none() {
        return SeasonStats {
            stats: first.stat.clone(),
            last_played: None,
        };
    }

    match splits.last() {
        Some(last) => SeasonStats {
            stats: last.stat.clone(),
            last_played: Some(last.season.clone()),
        },
        None => SeasonStats::default(),
    }
}

/// Builds the player profile, memoized per player id for the session.
#[instrument(skip(client, config, cache))]
pub async fn player_profile(
    client: &Client,
    config: &Config,
    cache: &mut SessionCache,
    player_id: i64,
) -> Result<PlayerProfile, AppError> {
    if let Some(cached) = cache.players.get(&player_id) {
        debug!("Session cache hit for player profile: {player_id}");
        return Ok(cached.clone());
    }

    let person = fetch_person(client, config, player_id).await?;

    let height = person.height.as_deref().ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("Player {player_id} has no height"),
            "people",
        )
    })?;

    let profile = PlayerProfile {
        id: person.id,
        name: person.full_name.clone(),
        photo: player_headshot_2x_url(person.id),
        position: position_abbreviation(&person)?,
        bat_side: hand_code(person.bat_side.as_ref(), "batSide", person.id)?,
        pitch_hand: hand_code(person.pitch_hand.as_ref(), "pitchHand", person.id)?,
        age: display_or_missing(person.current_age.map(|age| age.to_string())),
        height: normalize_height(height),
        weight: display_or_missing(person.weight.map(|w| w.to_string())),
        draft_year: person
            .draft_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| UNDRAFTED.to_string()),
    };

    cache.players.insert(player_id, profile.clone());
    Ok(profile)
}

/// Builds the year-by-year career table for one stat group, memoized per
/// (player, group). A player with no history yields an empty table.
#[instrument(skip(client, config, cache))]
pub async fn career_stats(
    client: &Client,
    config: &Config,
    cache: &mut SessionCache,
    player_id: i64,
    group: StatGroup,
) -> Result<Vec<CareerRow>, AppError> {
    if let Some(cached) = cache.careers.get(&(player_id, group)) {
        debug!("Session cache hit for career stats: {player_id} ({group})");
        return Ok(cached.clone());
    }

    let person = fetch_person_with_stats(client, config, player_id, group).await?;

    let rows: Vec<CareerRow> = person
        .stats
        .as_deref()
        .and_then(|groups| groups.first())
        .map(|stats_group| {
            stats_group
                .splits
                .iter()
                .map(|split| CareerRow {
                    season: split.season.clone(),
                    team: split.team.as_ref().and_then(|team| team.name.clone()),
                    stats: split.stat.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    cache.careers.insert((player_id, group), rows.clone());
    Ok(rows)
}
