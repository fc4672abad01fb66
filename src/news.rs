use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use rss::Channel;

use crate::domain::NewsItem;

#[derive(Clone)]
pub struct NewsClient {
    feed_url: String,
    http: Client,
    timeout: Duration,
}

impl NewsClient {
    pub fn new(feed_url: String, timeout: Duration) -> Self {
        Self {
            feed_url,
            http: Client::new(),
            timeout,
        }
    }

    pub async fn fetch(&self, limit: usize) -> Result<Vec<NewsItem>> {
        let bytes = self
            .http
            .get(&self.feed_url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let channel = Channel::read_from(&bytes[..])?;
        Ok(items_from_channel(&channel, limit))
    }
}

/// Maps the first `limit` feed items to headlines. Items without a title or
/// link keep an empty string for the missing field.
pub fn items_from_channel(channel: &Channel, limit: usize) -> Vec<NewsItem> {
    channel
        .items()
        .iter()
        .take(limit)
        .map(|item| NewsItem {
            title: item.title().unwrap_or_default().to_string(),
            link: item.link().unwrap_or_default().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>fintech search</title>
    <link>https://news.example.com/rss</link>
    <description>latest fintech coverage</description>
    <item>
      <title>Regulator publishes new UPI guidelines</title>
      <link>https://news.example.com/a</link>
    </item>
    <item>
      <title>Payments startup raises series B</title>
      <link>https://news.example.com/b</link>
    </item>
    <item>
      <title>Bank pilots offline wallets</title>
      <link>https://news.example.com/c</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_items_mapped_in_feed_order() {
        let channel = Channel::read_from(SAMPLE_FEED.as_bytes()).unwrap();
        let items = items_from_channel(&channel, 10);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Regulator publishes new UPI guidelines");
        assert_eq!(items[0].link, "https://news.example.com/a");
        assert_eq!(items[2].title, "Bank pilots offline wallets");
    }

    #[test]
    fn test_limit_truncates_items() {
        let channel = Channel::read_from(SAMPLE_FEED.as_bytes()).unwrap();
        let items = items_from_channel(&channel, 2);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "Payments startup raises series B");
    }
}
