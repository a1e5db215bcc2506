//! View-model builders: compose raw accessors into flat, template-ready
//! records, preserving source API ordering throughout.

mod format;
mod leaders;
mod news;
mod player;
mod standings;
mod team;

pub use format::{
    display_or_missing, normalize_height, rank_display, stat_display, stat_number,
    stat_percentage, team_slug,
};
pub use leaders::{CategoryLeaders, LeaderRow, category_leaders};
pub use news::{NewsStory, RecentNews, format_news_date, recent_news};
pub use player::{
    CareerRow, PlayerProfile, SeasonStats, career_stats, player_profile, season_stats,
};
pub use standings::{DivisionStandings, DivisionTeamRow, division_standings};
pub use team::{HitterRow, PitcherRow, TeamInfo, TeamRoster, team_info, team_roster};
