//! Category leaders view-model

use futures::future::join_all;
use reqwest::Client;
use tracing::instrument;

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::api::{fetch_category_leaders, fetch_person, player_headshot_url};
use crate::stats_api::models::StatGroup;

use super::format::position_abbreviation;
use super::format::display_or_missing;

/// Leaders table for one category and stat group, in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLeaders {
    pub category: String,
    pub rows: Vec<LeaderRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderRow {
    pub rank: i64,
    pub value: String,
    pub position: String,
    pub first_name: String,
    pub last_name: String,
    pub player_id: i64,
    pub player_photo: String,
}

/// Builds the leaders table for a category, keeping only the group matching
/// `player_type`. Per-leader player lookups fan out concurrently; rows come
/// back in the API's ordering.
#[instrument(skip(client, config))]
pub async fn category_leaders(
    client: &Client,
    config: &Config,
    category: &str,
    player_type: StatGroup,
) -> Result<CategoryLeaders, AppError> {
    let groups = fetch_category_leaders(client, config, category).await?;

    let group = groups
        .into_iter()
        .find(|group| group.stat_group.as_deref() == Some(player_type.as_str()))
        .ok_or_else(|| {
            AppError::api_no_data(
                format!("No {player_type} leaders for category {category}"),
                category,
            )
        })?;

    let lookups = group
        .leaders
        .iter()
        .map(|leader| fetch_person(client, config, leader.person.id));
    let people = join_all(lookups).await;

    let mut rows = Vec::with_capacity(group.leaders.len());
    for (leader, person) in group.leaders.iter().zip(people) {
        let person = person?;
        rows.push(LeaderRow {
            rank: leader.rank,
            value: leader.value.clone(),
            position: position_abbreviation(&person)?,
            first_name: display_or_missing(person.first_name.clone()),
            last_name: display_or_missing(person.last_name.clone()),
            player_id: person.id,
            player_photo: player_headshot_url(person.id),
        });
    }

    Ok(CategoryLeaders {
        category: category.to_string(),
        rows,
    })
}
