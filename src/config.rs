use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Gemini
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,

    // News feed
    pub news_feed_url: String,
    pub news_limit: usize,

    // HTTP
    pub http_timeout_secs: u64,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|x| x.parse().ok())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Gemini. The key is optional at boot: news/scan paths work without
        // it, the insight path errors when it is missing.
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let gemini_base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-pro".to_string());

        // News feed
        let news_feed_url = std::env::var("FINHUB_NEWS_FEED_URL").unwrap_or_else(|_| {
            "https://news.google.com/rss/search?q=fintech&hl=en-IN&gl=IN&ceid=IN:en".to_string()
        });
        let news_limit = env_parse::<usize>("FINHUB_NEWS_LIMIT").unwrap_or(15);
        if news_limit == 0 {
            return Err(anyhow!("FINHUB_NEWS_LIMIT must be at least 1"));
        }

        // HTTP
        let http_timeout_secs = env_parse::<u64>("FINHUB_HTTP_TIMEOUT_SECS").unwrap_or(20);
        if http_timeout_secs == 0 {
            return Err(anyhow!("FINHUB_HTTP_TIMEOUT_SECS must be at least 1"));
        }

        Ok(Self {
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            news_feed_url,
            news_limit,
            http_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_reads_typed_values() {
        std::env::set_var("FINHUB_TEST_ENV_PARSE_LIMIT", "7");
        assert_eq!(env_parse::<usize>("FINHUB_TEST_ENV_PARSE_LIMIT"), Some(7));
        std::env::remove_var("FINHUB_TEST_ENV_PARSE_LIMIT");
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        std::env::set_var("FINHUB_TEST_ENV_PARSE_GARBAGE", "not-a-number");
        assert_eq!(env_parse::<u64>("FINHUB_TEST_ENV_PARSE_GARBAGE"), None);
        std::env::remove_var("FINHUB_TEST_ENV_PARSE_GARBAGE");
    }

    #[test]
    fn test_env_parse_missing_key_is_none() {
        assert_eq!(env_parse::<u64>("FINHUB_TEST_ENV_PARSE_MISSING"), None);
    }
}
