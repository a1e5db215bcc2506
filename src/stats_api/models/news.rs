use serde::{Deserialize, Serialize};

/// Root of the RSS news feed document (`<rss>`).
///
/// The feed uses RSS 2.0 with Dublin Core authorship; quick-xml's serde
/// support maps attributes with an `@` prefix and keeps qualified element
/// names verbatim, so `image/@href` and `dc:creator` stay addressable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsFeed {
    pub channel: NewsChannel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsChannel {
    #[serde(rename = "item", default)]
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "dc:creator", default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub image: Option<NewsImage>,
    /// RFC 822 style publication date, e.g. "Tue, 05 Aug 2025 14:00:00 EDT"
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsImage {
    #[serde(rename = "@href")]
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_deserialization() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>MLB News</title>
    <item>
      <title>Late rally lifts Blue Jays</title>
      <link>https://www.mlb.com/news/late-rally</link>
      <dc:creator>Jane Reporter</dc:creator>
      <image href="https://img.mlbstatic.com/1.jpg"/>
      <pubDate>Tue, 05 Aug 2025 14:00:00 EDT</pubDate>
    </item>
    <item>
      <title>Trade deadline recap</title>
      <link>https://www.mlb.com/news/deadline</link>
      <pubDate>Mon, 04 Aug 2025 09:30:00 EDT</pubDate>
    </item>
  </channel>
</rss>"#;

        let feed: NewsFeed = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(feed.channel.items.len(), 2);

        let first = &feed.channel.items[0];
        assert_eq!(first.title, "Late rally lifts Blue Jays");
        assert_eq!(first.creator.as_deref(), Some("Jane Reporter"));
        assert_eq!(
            first.image.as_ref().map(|i| i.href.as_str()),
            Some("https://img.mlbstatic.com/1.jpg")
        );

        let second = &feed.channel.items[1];
        assert!(second.creator.is_none());
        assert!(second.image.is_none());
    }

    #[test]
    fn test_feed_with_cdata_title() {
        let xml = r#"<rss><channel>
          <item>
            <title><![CDATA[Walk-off win in the 10th]]></title>
            <link>https://www.mlb.com/news/walk-off</link>
            <pubDate>Sun, 03 Aug 2025 22:15:00 EDT</pubDate>
          </item>
        </channel></rss>"#;

        let feed: NewsFeed = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(feed.channel.items[0].title, "Walk-off win in the 10th");
    }
}
