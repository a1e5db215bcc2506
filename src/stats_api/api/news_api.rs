//! RSS news feed accessor

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::models::{NewsFeed, NewsItem};

use super::fetch_utils::fetch_xml;
use super::urls::build_news_url;

/// Fetches the news feed, league-wide or for one team, and unwraps the
/// channel's item list in feed order.
#[instrument(skip(client, config))]
pub async fn fetch_news(
    client: &Client,
    config: &Config,
    team: Option<&str>,
) -> Result<Vec<NewsItem>, AppError> {
    let url = build_news_url(&config.news_feed_url, team);
    let feed: NewsFeed = fetch_xml(client, &url).await?;

    if feed.channel.items.is_empty() {
        return Err(AppError::api_no_data("News feed has no items", url));
    }

    info!("Fetched {} news items", feed.channel.items.len());
    Ok(feed.channel.items)
}
