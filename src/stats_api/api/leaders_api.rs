//! Stat leaders accessor

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::models::{LeaderCategory, LeadersResponse};

use super::fetch_utils::fetch;
use super::urls::build_leaders_url;

/// Fetches league leaders for a category. The response carries one group
/// per stat group (hitting, pitching); filtering happens in the view layer.
#[instrument(skip(client, config))]
pub async fn fetch_category_leaders(
    client: &Client,
    config: &Config,
    category: &str,
) -> Result<Vec<LeaderCategory>, AppError> {
    let url = build_leaders_url(&config.api_domain, category);
    let response: LeadersResponse = fetch(client, &url).await?;

    if response.league_leaders.is_empty() {
        return Err(AppError::api_no_data(
            format!("No leaders for category {category}"),
            url,
        ));
    }

    info!(
        "Fetched {} leader groups for category {}",
        response.league_leaders.len(),
        category
    );
    Ok(response.league_leaders)
}
