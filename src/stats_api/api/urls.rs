//! URL building utilities for API endpoints and static assets
//!
//! Asset URLs are consumed directly as image sources by downstream
//! renderers, so their exact shape is part of the contract.

use crate::constants::assets;
use crate::stats_api::models::StatGroup;

/// Builds the standings URL for a league.
///
/// # Example
/// ```
/// use mlb_statsboard::stats_api::api::build_standings_url;
///
/// let url = build_standings_url("https://statsapi.example.com", 103);
/// assert_eq!(url, "https://statsapi.example.com/api/v1/standings?leagueId=103");
/// ```
pub fn build_standings_url(api_domain: &str, league_id: i64) -> String {
    format!("{api_domain}/api/v1/standings?leagueId={league_id}")
}

/// Builds the division info URL.
///
/// # Example
/// ```
/// use mlb_statsboard::stats_api::api::build_division_url;
///
/// let url = build_division_url("https://statsapi.example.com", 201);
/// assert_eq!(url, "https://statsapi.example.com/api/v1/divisions/201");
/// ```
pub fn build_division_url(api_domain: &str, division_id: i64) -> String {
    format!("{api_domain}/api/v1/divisions/{division_id}")
}

/// Builds the team info URL.
pub fn build_team_url(api_domain: &str, team_id: i64) -> String {
    format!("{api_domain}/api/v1/teams/{team_id}")
}

/// Builds the team roster URL.
pub fn build_roster_url(api_domain: &str, team_id: i64) -> String {
    format!("{api_domain}/api/v1/teams/{team_id}/roster")
}

/// Builds the player info URL.
pub fn build_person_url(api_domain: &str, player_id: i64) -> String {
    format!("{api_domain}/api/v1/people/{player_id}")
}

/// Builds the player info URL hydrated with year-by-year stats for one group.
///
/// # Example
/// ```
/// use mlb_statsboard::stats_api::api::build_person_stats_url;
/// use mlb_statsboard::stats_api::models::StatGroup;
///
/// let url = build_person_stats_url("https://statsapi.example.com", 665489, StatGroup::Hitting);
/// assert_eq!(
///     url,
///     "https://statsapi.example.com/api/v1/people/665489?hydrate=stats(group=[hitting],type=[yearByYear])"
/// );
/// ```
pub fn build_person_stats_url(api_domain: &str, player_id: i64, group: StatGroup) -> String {
    format!(
        "{api_domain}/api/v1/people/{player_id}?hydrate=stats(group=[{}],type=[yearByYear])",
        group.as_str()
    )
}

/// Builds the stat leaders URL for a category.
pub fn build_leaders_url(api_domain: &str, category: &str) -> String {
    format!("{api_domain}/api/v1/stats/leaders?leaderCategories={category}")
}

/// Builds the news feed URL, rewriting the league feed into a team feed when
/// a team slug is given.
///
/// # Example
/// ```
/// use mlb_statsboard::stats_api::api::build_news_url;
///
/// let league = build_news_url("https://www.mlb.com/feeds/news/rss.xml", None);
/// assert_eq!(league, "https://www.mlb.com/feeds/news/rss.xml");
///
/// let team = build_news_url("https://www.mlb.com/feeds/news/rss.xml", Some("bluejays"));
/// assert_eq!(team, "https://www.mlb.com/bluejays/feeds/news/rss.xml");
/// ```
pub fn build_news_url(feed_url: &str, team: Option<&str>) -> String {
    match team {
        Some(team) => feed_url.replace("feeds", &format!("{team}/feeds")),
        None => feed_url.to_string(),
    }
}

/// Team logo SVG URL.
pub fn team_logo_url(team_id: i64) -> String {
    format!("{}/{team_id}.svg", assets::TEAM_LOGO_BASE)
}

/// Player headshot PNG URL (roster-table size).
pub fn player_headshot_url(player_id: i64) -> String {
    format!("{}/{player_id}.png", assets::HEADSHOT_BASE)
}

/// Player headshot PNG URL at double resolution (profile-page size).
pub fn player_headshot_2x_url(player_id: i64) -> String {
    format!("{}/{player_id}@2x.png", assets::HEADSHOT_BASE)
}

/// Ballpark illustration SVG URL.
pub fn venue_image_url(venue_id: i64) -> String {
    format!("{}/{venue_id}.svg", assets::VENUE_IMAGE_BASE)
}
