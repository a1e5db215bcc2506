use mlb_statsboard::config::Config;
use mlb_statsboard::stats_api::api::create_http_client_with_timeout;
use mlb_statsboard::stats_api::cache::SessionCache;
use mlb_statsboard::stats_api::models::StatGroup;
use mlb_statsboard::stats_api::views::{career_stats, player_profile};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        api_domain: server.uri(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_player_profile_fields() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let mut cache = SessionCache::new();

    let body = json!({
        "people": [{
            "id": 665489,
            "fullName": "Vladimir Guerrero Jr.",
            "firstName": "Vladimir",
            "lastName": "Guerrero Jr.",
            "currentAge": 26,
            "height": "6' 2\"",
            "weight": 245,
            "primaryPosition": {"code": "3", "abbreviation": "1B"},
            "batSide": {"code": "R"},
            "pitchHand": {"code": "R"},
            "draftYear": 2015
        }]
    });
    Mock::given(method("GET"))
        .and(path("/api/v1/people/665489"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let profile = player_profile(&client, &config, &mut cache, 665489)
        .await
        .unwrap();

    assert_eq!(profile.id, 665489);
    assert_eq!(profile.name, "Vladimir Guerrero Jr.");
    assert_eq!(
        profile.photo,
        "https://content.mlb.com/images/headshots/current/60x60/665489@2x.png"
    );
    assert_eq!(profile.position, "1B");
    assert_eq!(profile.bat_side, "R");
    assert_eq!(profile.pitch_hand, "R");
    assert_eq!(profile.age, "26");
    assert_eq!(profile.height, "6'2\"");
    assert_eq!(profile.weight, "245");
    assert_eq!(profile.draft_year, "2015");
}

#[tokio::test]
async fn test_player_profile_undrafted_sentinel() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let mut cache = SessionCache::new();

    let body = json!({
        "people": [{
            "id": 12345,
            "fullName": "Intl Signing",
            "height": "5' 11\"",
            "primaryPosition": {"code": "6", "abbreviation": "SS"},
            "batSide": {"code": "S"},
            "pitchHand": {"code": "R"}
        }]
    });
    Mock::given(method("GET"))
        .and(path("/api/v1/people/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let profile = player_profile(&client, &config, &mut cache, 12345)
        .await
        .unwrap();

    assert_eq!(profile.draft_year, "Undrafted");
    assert_eq!(profile.weight, "-");
    assert_eq!(profile.age, "-");
}

#[tokio::test]
async fn test_player_profile_is_memoized_per_session() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let mut cache = SessionCache::new();

    let body = json!({
        "people": [{
            "id": 7,
            "fullName": "Cache Hit",
            "height": "6' 0\"",
            "primaryPosition": {"code": "2", "abbreviation": "C"},
            "batSide": {"code": "L"},
            "pitchHand": {"code": "R"}
        }]
    });
    Mock::given(method("GET"))
        .and(path("/api/v1/people/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let first = player_profile(&client, &config, &mut cache, 7).await.unwrap();
    let second = player_profile(&client, &config, &mut cache, 7).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_career_stats_rows_in_api_order() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let mut cache = SessionCache::new();

    let body = json!({
        "people": [{
            "id": 665489,
            "fullName": "Vladimir Guerrero Jr.",
            "stats": [{
                "splits": [
                    {"season": "2023", "team": {"id": 141, "name": "Toronto Blue Jays"},
                     "stat": {"homeRuns": 26, "avg": ".264"}},
                    {"season": "2024", "team": {"id": 141, "name": "Toronto Blue Jays"},
                     "stat": {"homeRuns": 30, "avg": ".323"}},
                    {"season": "2024", "stat": {"homeRuns": 30, "avg": ".323"}}
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
        .mount(&server)
        .await;

    let rows = career_stats(&client, &config, &mut cache, 665489, StatGroup::Hitting)
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].season, "2023");
    assert_eq!(rows[0].team.as_deref(), Some("Toronto Blue Jays"));
    // Combined totals carry no team attribution
    assert!(rows[2].team.is_none());
}

#[tokio::test]
async fn test_career_stats_no_history_is_empty() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let mut cache = SessionCache::new();

    let body = json!({
        "people": [{"id": 999, "fullName": "Rookie Prospect"}]
    });
    Mock::given(method("GET"))
        .and(path("/api/v1/people/999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let rows = career_stats(&client, &config, &mut cache, 999, StatGroup::Pitching)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_career_stats_memoized_per_group() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    let mut cache = SessionCache::new();

    let body = json!({
        "people": [{"id": 42, "fullName": "Two Way", "stats": [{"splits": []}]}]
    });
    // One fetch per stat group, second build of each group hits the cache
    Mock::given(method("GET"))
        .and(path("/api/v1/people/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(2)
        .mount(&server)
        .await;

    for _ in 0..2 {
        career_stats(&client, &config, &mut cache, 42, StatGroup::Hitting)
            .await
            .unwrap();
        career_stats(&client, &config, &mut cache, 42, StatGroup::Pitching)
            .await
            .unwrap();
    }
}
