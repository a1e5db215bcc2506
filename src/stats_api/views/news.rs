//! Recent-news view-model

use chrono::{DateTime, NaiveDateTime};
use reqwest::Client;
use tracing::instrument;

use crate::config::Config;
use crate::constants::RECENT_NEWS_LIMIT;
use crate::error::AppError;
use crate::stats_api::api::fetch_news;
use crate::stats_api::models::NewsItem;

/// Template-ready news list: the most recent stories, in feed order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentNews {
    pub stories: Vec<NewsStory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsStory {
    pub title: String,
    pub link: String,
    pub author: Option<String>,
    pub image: String,
    /// Short display date, e.g. "Aug 05 2025"
    pub date: String,
}

/// Builds the recent-news list for the league, or for one team when a feed
/// slug is given. Keeps at most the first four entries; the feed is assumed
/// reverse-chronological, and its order is preserved.
#[instrument(skip(client, config))]
pub async fn recent_news(
    client: &Client,
    config: &Config,
    team: Option<&str>,
) -> Result<RecentNews, AppError> {
    let items = fetch_news(client, config, team).await?;
    let stories = items
        .into_iter()
        .take(RECENT_NEWS_LIMIT)
        .map(news_story)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecentNews { stories })
}

fn news_story(item: NewsItem) -> Result<NewsStory, AppError> {
    let image = item
        .image
        .map(|i| i.href)
        .ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("News item '{}' has no image", item.title),
                &item.link,
            )
        })?;
    let date = format_news_date(&item.pub_date)?;

    Ok(NewsStory {
        title: item.title,
        link: item.link,
        author: item.creator,
        image,
        date,
    })
}

/// Reformats an RFC 822 style publication date ("Tue, 05 Aug 2025 14:00:00
/// EDT") to the short display form ("Aug 05 2025").
pub fn format_news_date(pub_date: &str) -> Result<String, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(pub_date) {
        return Ok(parsed.format("%b %d %Y").to_string());
    }

    // Some feeds carry zone abbreviations rfc2822 parsing rejects; retry
    // without the trailing zone token
    let without_zone = pub_date
        .rsplit_once(' ')
        .map(|(rest, _zone)| rest)
        .unwrap_or(pub_date);
    NaiveDateTime::parse_from_str(without_zone, "%a, %d %b %Y %H:%M:%S")
        .map(|parsed| parsed.format("%b %d %Y").to_string())
        .map_err(|e| {
            AppError::datetime_parse_error(format!(
                "Unparseable publication date '{pub_date}': {e}"
            ))
        })
}
