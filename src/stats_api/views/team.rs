//! Team page view-models: club info block and bucketed roster tables

use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::constants::PITCHER_POSITION_CODE;
use crate::error::AppError;
use crate::stats_api::api::{
    fetch_person, fetch_person_with_stats, fetch_roster, fetch_standings, fetch_team,
    player_headshot_url, team_logo_url, venue_image_url,
};
use crate::stats_api::api::fetch_division;
use crate::stats_api::cache::SessionCache;
use crate::stats_api::models::{Person, StatGroup};

use super::format::{
    display_or_missing, hand_code, position_abbreviation, rank_display, stat_display,
    stat_number, stat_percentage, team_slug,
};
use super::player::{SeasonStats, season_stats};

/// Team info block for the team page header.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamInfo {
    pub team_id: i64,
    pub logo: String,
    /// Full display name, e.g. "Toronto Blue Jays"
    pub name: String,
    /// Lowercase squashed club name, doubles as the news feed slug
    pub club_name: String,
    pub abbreviation: String,
    /// Short division name, e.g. "AL East"
    pub division: String,
    pub venue: String,
    pub venue_img: String,
    pub season: String,
    /// Ordinal rank within the division, e.g. "2nd"
    pub division_rank: String,
    /// Record line, e.g. "94-68 (.580)"
    pub record: String,
    pub games_back: String,
}

/// Roster grouped into pitcher and hitter tables, each in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster {
    pub pitchers: Vec<PitcherRow>,
    pub hitters: Vec<HitterRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PitcherRow {
    pub player_id: i64,
    pub position: String,
    pub jersey_number: String,
    pub photo: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub throw_hand: String,
    /// Set when the stats shown are from an earlier season than requested
    pub last_played: Option<String>,
    pub innings_pitched: String,
    pub era: String,
    pub hr_per_9: String,
    pub ops: String,
    pub strikeouts: String,
    pub base_on_balls: String,
    pub strikeout_pct: String,
    pub bb_pct: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitterRow {
    pub player_id: i64,
    pub position: String,
    pub jersey_number: String,
    pub photo: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub bat_side: String,
    pub throw_hand: String,
    pub last_played: Option<String>,
    pub plate_appearances: String,
    pub hits: String,
    pub doubles: String,
    pub triples: String,
    pub home_runs: String,
    pub stolen_bases: String,
    pub avg: String,
    pub obp: String,
    pub ops: String,
    pub base_on_balls: String,
    pub strikeout_pct: String,
    pub bb_pct: String,
}

/// Builds the team info block, memoized per team id for the session.
#[instrument(skip(client, config, cache))]
pub async fn team_info(
    client: &Client,
    config: &Config,
    cache: &mut SessionCache,
    team_id: i64,
) -> Result<TeamInfo, AppError> {
    if let Some(cached) = cache.team_info.get(&team_id) {
        debug!("Session cache hit for team info: {team_id}");
        return Ok(cached.clone());
    }

    let team = fetch_team(client, config, team_id).await?;
    let standings = fetch_standings(client, config, team.league.id).await?;

    let division_record = standings
        .iter()
        .find(|record| record.division.id == team.division.id)
        .ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("League standings carry no division {}", team.division.id),
                "standings",
            )
        })?;

    let team_standing = division_record
        .team_records
        .iter()
        .find(|record| record.team.id == team_id)
        .ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("Division standings carry no team {team_id}"),
                "standings",
            )
        })?;

    let division = fetch_division(client, config, team.division.id).await?;

    let rank: i64 = team_standing.division_rank.parse().map_err(|_| {
        AppError::api_unexpected_structure(
            format!(
                "Unparseable division rank '{}' for team {team_id}",
                team_standing.division_rank
            ),
            "standings",
        )
    })?;

    let league_record = &team_standing.league_record;
    let info = TeamInfo {
        team_id,
        logo: team_logo_url(team_id),
        name: team.name,
        club_name: team_slug(&team.club_name),
        abbreviation: team.abbreviation,
        division: division.name_short,
        venue: team.venue.name,
        venue_img: venue_image_url(team.venue.id),
        season: team.season.to_string(),
        division_rank: rank_display(rank)?,
        record: format!(
            "{}-{} ({})",
            league_record.wins, league_record.losses, league_record.pct
        ),
        games_back: display_or_missing(team_standing.division_games_back.clone()),
    };

    cache.team_info.insert(team_id, info.clone());
    Ok(info)
}

/// Builds the bucketed roster for a team and season, memoized per team id.
/// Per-player lookups fan out concurrently; bucket order follows the API's
/// roster ordering.
#[instrument(skip(client, config, cache))]
pub async fn team_roster(
    client: &Client,
    config: &Config,
    cache: &mut SessionCache,
    team_id: i64,
    season: &str,
) -> Result<TeamRoster, AppError> {
    if let Some(cached) = cache.rosters.get(&team_id) {
        debug!("Session cache hit for roster: {team_id}");
        return Ok(cached.clone());
    }

    let roster = fetch_roster(client, config, team_id).await?;

    let lookups = roster
        .iter()
        .map(|entry| build_roster_player(client, config, entry.person.id, season));
    let players = join_all(lookups).await;

    let mut pitchers = Vec::new();
    let mut hitters = Vec::new();
    for player in players {
        match player? {
            RosterPlayer::Pitcher(row) => pitchers.push(row),
            RosterPlayer::Hitter(row) => hitters.push(row),
        }
    }

    let built = TeamRoster { pitchers, hitters };
    cache.rosters.insert(team_id, built.clone());
    Ok(built)
}

enum RosterPlayer {
    Pitcher(PitcherRow),
    Hitter(HitterRow),
}

async fn build_roster_player(
    client: &Client,
    config: &Config,
    player_id: i64,
    season: &str,
) -> Result<RosterPlayer, AppError> {
    let person = fetch_person(client, config, player_id).await?;
    let position = position_abbreviation(&person)?;
    let code = person
        .primary_position
        .as_ref()
        .map(|p| p.code.as_str())
        .unwrap_or_default();

    if code == PITCHER_POSITION_CODE {
        let hydrated =
            fetch_person_with_stats(client, config, player_id, StatGroup::Pitching).await?;
        let selection = season_stats(&hydrated, season);
        Ok(RosterPlayer::Pitcher(pitcher_row(
            &person, position, &selection,
        )?))
    } else {
        let hydrated =
            fetch_person_with_stats(client, config, player_id, StatGroup::Hitting).await?;
        let selection = season_stats(&hydrated, season);
        Ok(RosterPlayer::Hitter(hitter_row(
            &person, position, &selection,
        )?))
    }
}

fn pitcher_row(
    person: &Person,
    position: String,
    selection: &SeasonStats,
) -> Result<PitcherRow, AppError> {
    let stats = &selection.stats;
    let strikeouts = stat_number(stats, "strikeOuts");
    let base_on_balls = stat_number(stats, "baseOnBalls");
    let batters_faced = stat_number(stats, "battersFaced");

    Ok(PitcherRow {
        player_id: person.id,
        position,
        jersey_number: display_or_missing(person.primary_number.clone()),
        photo: player_headshot_url(person.id),
        first_name: display_or_missing(person.first_name.clone()),
        last_name: display_or_missing(person.last_name.clone()),
        age: display_or_missing(person.current_age.map(|age| age.to_string())),
        throw_hand: hand_code(person.pitch_hand.as_ref(), "pitchHand", person.id)?,
        last_played: selection.last_played.clone(),
        innings_pitched: stat_display(stats, "inningsPitched"),
        era: stat_display(stats, "era"),
        hr_per_9: stat_display(stats, "homeRunsPer9"),
        ops: stat_display(stats, "ops"),
        strikeouts: stat_display(stats, "strikeOuts"),
        base_on_balls: stat_display(stats, "baseOnBalls"),
        strikeout_pct: stat_percentage(strikeouts, batters_faced),
        bb_pct: stat_percentage(base_on_balls, batters_faced),
    })
}

fn hitter_row(
    person: &Person,
    position: String,
    selection: &SeasonStats,
) -> Result<HitterRow, AppError> {
    let stats = &selection.stats;
    let strikeouts = stat_number(stats, "strikeOuts");
    let base_on_balls = stat_number(stats, "baseOnBalls");
    let at_bats = stat_number(stats, "atBats");

    Ok(HitterRow {
        player_id: person.id,
        position,
        jersey_number: display_or_missing(person.primary_number.clone()),
        photo: player_headshot_url(person.id),
        first_name: display_or_missing(person.first_name.clone()),
        last_name: display_or_missing(person.last_name.clone()),
        age: display_or_missing(person.current_age.map(|age| age.to_string())),
        bat_side: hand_code(person.bat_side.as_ref(), "batSide", person.id)?,
        throw_hand: hand_code(person.pitch_hand.as_ref(), "pitchHand", person.id)?,
        last_played: selection.last_played.clone(),
        plate_appearances: stat_display(stats, "plateAppearances"),
        hits: stat_display(stats, "hits"),
        doubles: stat_display(stats, "doubles"),
        triples: stat_display(stats, "triples"),
        home_runs: stat_display(stats, "homeRuns"),
        stolen_bases: stat_display(stats, "stolenBases"),
        avg: stat_display(stats, "avg"),
        obp: stat_display(stats, "obp"),
        ops: stat_display(stats, "ops"),
        base_on_balls: stat_display(stats, "baseOnBalls"),
        strikeout_pct: stat_percentage(strikeouts, at_bats),
        bb_pct: stat_percentage(base_on_balls, at_bats),
    })
}
