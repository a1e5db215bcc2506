//! Command handlers: thin consumers of the view-model builders.

use tracing::info;

use crate::config::Config;
use crate::constants::leagues;
use crate::display;
use crate::error::AppError;
use crate::stats_api::api::{create_http_client_with_timeout, fetch_standings};
use crate::stats_api::cache::SessionCache;
use crate::stats_api::models::StatGroup;
use crate::stats_api::views::{
    career_stats, category_leaders, division_standings, player_profile, recent_news, team_info,
    team_roster,
};

/// Renders both leagues' division standings plus league news.
pub async fn handle_standings(config: &Config) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    for (league_name, league_id) in [
        ("American League", leagues::AMERICAN),
        ("National League", leagues::NATIONAL),
    ] {
        info!("Building standings for {league_name}");
        let records = fetch_standings(&client, config, league_id).await?;
        println!();
        println!("=== {league_name} ===");
        for idx in 0..records.len() {
            let division = division_standings(&client, config, &records, idx).await?;
            display::print_division_standings(&division);
        }
    }

    let news = recent_news(&client, config, None).await?;
    display::print_news(&news);
    Ok(())
}

/// Renders a team page: info block, rosters, team news.
pub async fn handle_team(config: &Config, team_id: i64) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let mut cache = SessionCache::new();

    let info = team_info(&client, config, &mut cache, team_id).await?;
    let roster = team_roster(&client, config, &mut cache, team_id, &info.season).await?;

    display::print_team_info(&info);
    display::print_roster(&roster);

    let news = recent_news(&client, config, Some(&info.club_name)).await?;
    display::print_news(&news);
    Ok(())
}

/// Renders a player page: profile plus the year-by-year career table.
pub async fn handle_player(
    config: &Config,
    player_id: i64,
    group: StatGroup,
) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let mut cache = SessionCache::new();

    let profile = player_profile(&client, config, &mut cache, player_id).await?;
    let career = career_stats(&client, config, &mut cache, player_id, group).await?;

    display::print_player_profile(&profile);
    display::print_career(&career, group);
    Ok(())
}

/// Renders the leaders table for one category and stat group.
pub async fn handle_leaders(
    config: &Config,
    category: &str,
    group: StatGroup,
) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let leaders = category_leaders(&client, config, category, group).await?;
    display::print_leaders(&leaders);
    Ok(())
}

/// Renders recent news, league-wide or for one team feed slug.
pub async fn handle_news(config: &Config, team: Option<&str>) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let news = recent_news(&client, config, team).await?;
    display::print_news(&news);
    Ok(())
}
