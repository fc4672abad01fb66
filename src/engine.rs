use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::config::Config;
use crate::domain::NewsItem;
use crate::gemini::{headline_prompt, GeminiClient};
use crate::news::NewsClient;

#[derive(Clone)]
pub struct Engine {
    pub cfg: Config,
    news: NewsClient,
    gemini: GeminiClient,
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        let timeout = Duration::from_secs(cfg.http_timeout_secs);
        let news = NewsClient::new(cfg.news_feed_url.clone(), timeout);
        let gemini = GeminiClient::new(
            cfg.gemini_base_url.clone(),
            cfg.gemini_model.clone(),
            cfg.gemini_api_key.clone(),
            timeout,
        );
        Self { cfg, news, gemini }
    }

    pub async fn latest_news(&self) -> Result<Vec<NewsItem>> {
        self.news.fetch(self.cfg.news_limit).await
    }

    /// Fetches the feed, selects the 1-based headline, and asks the model
    /// for a summary with legal/regulatory context.
    pub async fn headline_insight(&self, index: usize) -> Result<(NewsItem, String)> {
        let items = self.latest_news().await?;
        let item = index
            .checked_sub(1)
            .and_then(|i| items.get(i))
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "headline index {index} out of range (1..={})",
                    items.len()
                )
            })?;

        info!(headline = %item.title, "engine.headline_insight");

        let insight = self.gemini.generate(&headline_prompt(&item.title)).await?;
        Ok((item, insight))
    }
}
