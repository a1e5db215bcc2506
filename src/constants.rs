//! Application-wide constants and configuration values
//!
//! This module centralizes base URLs, league identifiers and magic numbers
//! so that endpoint and asset conventions live in one place.

/// Default base URL for the MLB Stats API
pub const DEFAULT_STATS_API_BASE: &str = "https://statsapi.mlb.com";

/// Default league-wide RSS news feed. Team feeds are derived from this URL
/// by path substitution, e.g. https://www.mlb.com/bluejays/feeds/news/rss.xml
pub const DEFAULT_NEWS_FEED_URL: &str = "https://www.mlb.com/feeds/news/rss.xml";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of stories kept by the recent-news view
pub const RECENT_NEWS_LIMIT: usize = 4;

/// Primary-position code that classifies a player as a pitcher
pub const PITCHER_POSITION_CODE: &str = "1";

/// Placeholder rendered for stats the API did not report
pub const MISSING_STAT: &str = "-";

/// Sentinel rendered when a player has no draft year
pub const UNDRAFTED: &str = "Undrafted";

/// League identifiers used by the standings endpoint
pub mod leagues {
    /// American League
    pub const AMERICAN: i64 = 103;

    /// National League
    pub const NATIONAL: i64 = 104;
}

/// Static-asset URL bases. These are consumed directly as image sources by
/// downstream renderers, so the exact formats matter.
pub mod assets {
    /// Team logo SVGs, keyed by team id
    pub const TEAM_LOGO_BASE: &str = "https://www.mlbstatic.com/team-logos";

    /// Player headshot PNGs, keyed by player id
    pub const HEADSHOT_BASE: &str = "https://content.mlb.com/images/headshots/current/60x60";

    /// Ballpark illustration SVGs, keyed by venue id
    pub const VENUE_IMAGE_BASE: &str =
        "https://prod-gameday.mlbstatic.com/responsive-gameday-assets/1.2.0/images/fields";
}

/// Retry configuration for the HTTP client wrapper
pub mod retry {
    /// Maximum number of retry attempts for transient failures
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for Stats API base URL override
    pub const API_DOMAIN: &str = "STATSBOARD_API_DOMAIN";

    /// Environment variable for news feed URL override
    pub const NEWS_FEED: &str = "STATSBOARD_NEWS_FEED";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "STATSBOARD_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "STATSBOARD_HTTP_TIMEOUT";
}
