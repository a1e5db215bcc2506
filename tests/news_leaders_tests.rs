use mlb_statsboard::config::Config;
use mlb_statsboard::stats_api::api::create_http_client_with_timeout;
use mlb_statsboard::stats_api::models::StatGroup;
use mlb_statsboard::stats_api::views::{category_leaders, recent_news};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn news_config_for(server: &MockServer) -> Config {
    Config {
        news_feed_url: format!("{}/feeds/news/rss.xml", server.uri()),
        ..Config::default()
    }
}

fn api_config_for(server: &MockServer) -> Config {
    Config {
        api_domain: server.uri(),
        ..Config::default()
    }
}

fn feed_with_items(count: usize) -> String {
    let items: String = (0..count)
        .map(|i| {
            format!(
                r#"<item>
                     <title>Story {i}</title>
                     <link>https://www.mlb.com/news/story-{i}</link>
                     <dc:creator>Reporter {i}</dc:creator>
                     <image href="https://img.mlbstatic.com/{i}.jpg"/>
                     <pubDate>Tue, 05 Aug 2025 1{i}:00:00 GMT</pubDate>
                   </item>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel><title>MLB News</title>{items}</channel>
</rss>"#
    )
}

#[tokio::test]
async fn test_recent_news_truncates_to_four_in_feed_order() {
    let server = MockServer::start().await;
    let config = news_config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/feeds/news/rss.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_with_items(7)))
        .mount(&server)
        .await;

    let news = recent_news(&client, &config, None).await.unwrap();

    assert_eq!(news.stories.len(), 4);
    let titles: Vec<&str> = news.stories.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Story 0", "Story 1", "Story 2", "Story 3"]);
}

#[tokio::test]
async fn test_recent_news_short_feed_keeps_all_entries() {
    let server = MockServer::start().await;
    let config = news_config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/feeds/news/rss.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_with_items(2)))
        .mount(&server)
        .await;

    let news = recent_news(&client, &config, None).await.unwrap();
    assert_eq!(news.stories.len(), 2);
}

#[tokio::test]
async fn test_recent_news_story_fields() {
    let server = MockServer::start().await;
    let config = news_config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/feeds/news/rss.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_with_items(1)))
        .mount(&server)
        .await;

    let news = recent_news(&client, &config, None).await.unwrap();
    let story = &news.stories[0];

    assert_eq!(story.title, "Story 0");
    assert_eq!(story.link, "https://www.mlb.com/news/story-0");
    assert_eq!(story.author.as_deref(), Some("Reporter 0"));
    assert_eq!(story.image, "https://img.mlbstatic.com/0.jpg");
    assert_eq!(story.date, "Aug 05 2025");
}

#[tokio::test]
async fn test_recent_news_team_feed() {
    let server = MockServer::start().await;
    let config = news_config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/bluejays/feeds/news/rss.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_with_items(1)))
        .mount(&server)
        .await;

    let news = recent_news(&client, &config, Some("bluejays")).await.unwrap();
    assert_eq!(news.stories.len(), 1);
}

fn leaders_body() -> serde_json::Value {
    json!({
        "leagueLeaders": [
            {
                "leaderCategory": "strikeOuts",
                "statGroup": "hitting",
                "leaders": [
                    {"rank": 1, "value": "210", "person": {"id": 901, "fullName": "Free Swinger"}}
                ]
            },
            {
                "leaderCategory": "strikeOuts",
                "statGroup": "pitching",
                "leaders": [
                    {"rank": 1, "value": "238", "person": {"id": 701, "fullName": "Power Arm"}},
                    {"rank": 2, "value": "221", "person": {"id": 702, "fullName": "Crafty Vet"}}
                ]
            }
        ]
    })
}

fn leader_person(id: i64, first: &str, last: &str, abbrev: &str) -> serde_json::Value {
    json!({
        "people": [{
            "id": id,
            "fullName": format!("{first} {last}"),
            "firstName": first,
            "lastName": last,
            "primaryPosition": {"code": "1", "abbreviation": abbrev}
        }]
    })
}

#[tokio::test]
async fn test_category_leaders_filters_stat_group_and_keeps_order() {
    let server = MockServer::start().await;
    let config = api_config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/stats/leaders"))
        .and(query_param("leaderCategories", "strikeOuts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(leaders_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/701"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(leader_person(701, "Power", "Arm", "P")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/702"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(leader_person(702, "Crafty", "Vet", "P")),
        )
        .mount(&server)
        .await;

    let leaders = category_leaders(&client, &config, "strikeOuts", StatGroup::Pitching)
        .await
        .unwrap();

    assert_eq!(leaders.category, "strikeOuts");
    assert_eq!(leaders.rows.len(), 2);
    assert_eq!(leaders.rows[0].rank, 1);
    assert_eq!(leaders.rows[0].value, "238");
    assert_eq!(leaders.rows[0].last_name, "Arm");
    assert_eq!(leaders.rows[1].rank, 2);
    assert_eq!(leaders.rows[1].player_id, 702);
    assert_eq!(
        leaders.rows[0].player_photo,
        "https://content.mlb.com/images/headshots/current/60x60/701.png"
    );
}

#[tokio::test]
async fn test_category_leaders_missing_group_errors() {
    let server = MockServer::start().await;
    let config = api_config_for(&server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();

    let body = json!({
        "leagueLeaders": [
            {"leaderCategory": "era", "statGroup": "pitching", "leaders": []}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/v1/stats/leaders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = category_leaders(&client, &config, "era", StatGroup::Hitting).await;
    assert!(result.is_err());
}
