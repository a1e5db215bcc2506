//! Raw API accessors: one function per external endpoint, each performing a
//! single GET and returning the typed payload with its envelope unwrapped.

pub mod http_client;
mod fetch_utils;
mod leaders_api;
mod news_api;
mod player_api;
mod standings_api;
mod team_api;
mod urls;

pub use http_client::create_http_client_with_timeout;
pub use leaders_api::fetch_category_leaders;
pub use news_api::fetch_news;
pub use player_api::{fetch_person, fetch_person_with_stats};
pub use standings_api::{fetch_division, fetch_standings};
pub use team_api::{fetch_roster, fetch_team};
pub use urls::{
    build_division_url, build_leaders_url, build_news_url, build_person_stats_url,
    build_person_url, build_roster_url, build_standings_url, build_team_url,
    player_headshot_2x_url, player_headshot_url, team_logo_url, venue_image_url,
};
