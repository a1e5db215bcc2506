//! Player (people endpoint) accessors

use reqwest::Client;
use tracing::instrument;

use crate::config::Config;
use crate::error::AppError;
use crate::stats_api::models::{PeopleResponse, Person, StatGroup};

use super::fetch_utils::fetch;
use super::urls::{build_person_stats_url, build_person_url};

/// Fetches player info, unwrapping the single-element envelope.
#[instrument(skip(client, config))]
pub async fn fetch_person(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<Person, AppError> {
    let url = build_person_url(&config.api_domain, player_id);
    let response: PeopleResponse = fetch(client, &url).await?;

    response
        .people
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data(format!("No player with id {player_id}"), url))
}

/// Fetches player info hydrated with year-by-year stats for one group.
/// Players with no major-league history come back without a `stats` block;
/// that is not an error here, the caller decides what an empty history means.
#[instrument(skip(client, config))]
pub async fn fetch_person_with_stats(
    client: &Client,
    config: &Config,
    player_id: i64,
    group: StatGroup,
) -> Result<Person, AppError> {
    let url = build_person_stats_url(&config.api_domain, player_id, group);
    let response: PeopleResponse = fetch(client, &url).await?;

    response
        .people
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data(format!("No player with id {player_id}"), url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_api::api::http_client::create_test_http_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            api_domain: server.uri(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_person_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        let body = serde_json::json!({
            "people": [{
                "id": 665489,
                "fullName": "Vladimir Guerrero Jr.",
                "primaryPosition": {"code": "3", "abbreviation": "1B"}
            }]
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/people/665489"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let person = fetch_person(&client, &config_for(&mock_server), 665489)
            .await
            .unwrap();
        assert_eq!(person.full_name, "Vladimir Guerrero Jr.");
    }

    #[tokio::test]
    async fn test_fetch_person_with_stats_sends_hydrate_directive() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        let body = serde_json::json!({
            "people": [{
                "id": 665489,
                "fullName": "Vladimir Guerrero Jr.",
                "stats": [{
                    "splits": [
                        {"season": "2024", "stat": {"homeRuns": 30}}
                    ]
                }]
            }]
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/people/665489"))
            .and(query_param(
                "hydrate",
                "stats(group=[hitting],type=[yearByYear])",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let person = fetch_person_with_stats(
            &client,
            &config_for(&mock_server),
            665489,
            StatGroup::Hitting,
        )
        .await
        .unwrap();

        let stats = person.stats.unwrap();
        assert_eq!(stats[0].splits.len(), 1);
        assert_eq!(stats[0].splits[0].season, "2024");
    }

    #[tokio::test]
    async fn test_fetch_person_empty_envelope_fails_fast() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/api/v1/people/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"people": []})),
            )
            .mount(&mock_server)
            .await;

        let result = fetch_person(&client, &config_for(&mock_server), 1).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }
}
