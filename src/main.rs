use clap::Parser;
use crossterm::style::Stylize;
use tracing::{error, info};

use mlb_statsboard::cli::{Args, Command};
use mlb_statsboard::commands;
use mlb_statsboard::config::Config;
use mlb_statsboard::error::AppError;
use mlb_statsboard::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logging initialized, writing to {log_file_path}");

    let config = Config::load().await?;

    let result = match &args.command {
        Command::Standings => commands::handle_standings(&config).await,
        Command::Team { team_id } => commands::handle_team(&config, *team_id).await,
        Command::Player { player_id, group } => {
            commands::handle_player(&config, *player_id, *group).await
        }
        Command::Leaders { category, group } => {
            commands::handle_leaders(&config, category, *group).await
        }
        Command::News { team } => commands::handle_news(&config, team.as_deref()).await,
    };

    if let Err(e) = result {
        error!("Command failed: {e}");
        eprintln!("{}", format!("Error: {e}").red());
        if e.is_not_found() {
            eprintln!("Check the id or category and try again.");
        }
        // Flush file logs before exiting with a failure code
        drop(_guard);
        std::process::exit(1);
    }

    Ok(())
}
