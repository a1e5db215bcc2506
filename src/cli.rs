use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::stats_api::models::StatGroup;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// MLB Statsboard
///
/// A terminal viewer for MLB standings, team rosters, player profiles,
/// stat leaders and league news, backed by the public Stats API.
#[derive(Parser, Debug)]
#[command(author = "Sam Okamoto", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Write logs to a custom file path instead of the default location.
    #[arg(long = "log-file", global = true, help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Enable debug output: logs are mirrored to the console in addition
    /// to the log file.
    #[arg(long, global = true, help_heading = "Logging")]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show division standings for both leagues, with recent league news.
    Standings,

    /// Show a team page: club info, pitcher and hitter rosters, team news.
    Team {
        /// Stats API team id, e.g. 141 for the Toronto Blue Jays
        team_id: i64,
    },

    /// Show a player page: profile and year-by-year career stats.
    Player {
        /// Stats API player id
        player_id: i64,

        /// Stat group for the career table
        #[arg(long, value_enum, default_value_t = StatGroup::Hitting)]
        group: StatGroup,
    },

    /// Show league leaders for a stat category.
    Leaders {
        /// Leader category, e.g. homeRuns, era, strikeOuts
        category: String,

        /// Stat group to select when a category spans both
        #[arg(long, value_enum, default_value_t = StatGroup::Hitting)]
        group: StatGroup,
    },

    /// Show recent news for the league, or for one team.
    News {
        /// Team feed slug, e.g. "bluejays". Omit for league-wide news.
        team: Option<String>,
    },
}
