//! MLB Statsboard Library
//!
//! This library fetches team, player, standings, roster, stat-leader and
//! news data from the public MLB Stats API and reshapes it into flat,
//! display-ready view-models.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mlb_statsboard::config::Config;
//! use mlb_statsboard::error::AppError;
//! use mlb_statsboard::stats_api::api::create_http_client_with_timeout;
//! use mlb_statsboard::stats_api::cache::SessionCache;
//! use mlb_statsboard::stats_api::views::team_info;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let mut cache = SessionCache::new();
//!
//!     // Build the team info view-model (memoized in the session cache)
//!     let info = team_info(&client, &config, &mut cache, 141).await?;
//!     println!("{} plays at {}", info.name, info.venue);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod stats_api;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use stats_api::cache::{MemoMap, SessionCache};
pub use stats_api::models::StatGroup;
pub use stats_api::views::{
    CategoryLeaders, DivisionStandings, PlayerProfile, RecentNews, TeamInfo, TeamRoster,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
