use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    http: Client,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            http: Client::new(),
            timeout,
        }
    }

    /// Sends the prompt to the `generateContent` endpoint and returns the
    /// first candidate's text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is required for insight generation"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let resp = self
            .http
            .post(url)
            .query(&[("key", key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateContentResponse = resp.json().await?;
        body.first_text()
            .ok_or_else(|| anyhow!("model returned no candidates"))
    }
}

pub fn headline_prompt(headline: &str) -> String {
    format!(
        "Summarize this fintech headline and explain any legal or regulatory implications:\n\n{headline}"
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// The API returns usage/safety metadata too. Kept as JSON for
    /// forward-compat.
    #[serde(flatten)]
    pub rest: serde_json::Value,
}

impl GenerateContentResponse {
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Absent when the model blocks the response.
    #[serde(default)]
    pub content: Option<Content>,

    #[serde(flatten)]
    pub rest: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_prompt_embeds_headline() {
        let prompt = headline_prompt("RBI tightens wallet KYC rules");
        assert!(prompt.starts_with("Summarize this fintech headline"));
        assert!(prompt.ends_with("RBI tightens wallet KYC rules"));
    }

    #[test]
    fn test_request_shape() {
        let value = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "summary here" }], "role": "model" },
                  "finishReason": "STOP" }
            ],
            "usageMetadata": { "totalTokenCount": 42 }
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("summary here"));
    }

    #[test]
    fn test_empty_response_has_no_text() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.first_text().is_none());
    }
}
