//! OpenAI-compatible chat-completions client
//!
//! Sends a fixed instruction message plus one user message carrying page
//! content, requests a JSON-object completion, and validates the shape of
//! what comes back.

use super::{InsightError, InsightProvider, InsightResult, SentimentInsight, SeoCommentary};
use crate::config::InsightConfig;
use crate::ConfigError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const SENTIMENT_PROMPT: &str = "You are a website content analyzer. Focus only on analyzing \
the sentiment and tone of the provided website content. Provide a score (1-100), overall tone \
description, and specific content improvement suggestions. Do not provide any other type of \
analysis. Respond as JSON with exactly three fields: 'score', 'tone', and 'suggestions'.";

const SEO_PROMPT: &str = "You are a website SEO analyzer. Focus exclusively on analyzing the \
website content for SEO issues and providing actionable suggestions. Only look for SEO-related \
aspects like meta tags, content structure, keywords, and HTML semantics. Do not provide any \
other type of analysis. Format the response as JSON with exactly two arrays: 'issues' for SEO \
problems found and 'suggestions' for improvement recommendations.";

/// Insight provider backed by an OpenAI-compatible API
pub struct OpenAiInsight {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiInsight {
    /// Creates a client with the default API endpoint
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
        }
    }

    /// Builds a client from configuration, reading the API key from the
    /// configured environment variable
    pub fn from_config(config: &InsightConfig) -> Result<Self, ConfigError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| ConfigError::Validation(format!("{} not set", config.api_key_env)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Validation(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Overrides the API base URL (mock servers, proxies)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Requests a JSON-object completion and returns the raw content string
    async fn chat_json(&self, system: &str, user: &str) -> InsightResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "insight request failed");
                InsightError::Call(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(InsightError::QuotaExceeded);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Auth(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "model API error");
            return Err(InsightError::Call(format!(
                "model API returned {}: {}",
                status, body
            )));
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| InsightError::Format(e.to_string()))?;

        raw.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| InsightError::Format("no response content received".to_string()))
    }
}

#[async_trait]
impl InsightProvider for OpenAiInsight {
    async fn summarize_sentiment(&self, text: &str) -> InsightResult<SentimentInsight> {
        debug!(model = %self.model, "requesting sentiment analysis");
        let content = self.chat_json(SENTIMENT_PROMPT, text).await?;
        parse_sentiment(&content)
    }

    async fn suggest_seo(&self, html: &str) -> InsightResult<SeoCommentary> {
        debug!(model = %self.model, "requesting SEO commentary");
        let content = self.chat_json(SEO_PROMPT, html).await?;
        parse_commentary(&content)
    }
}

/// Validates the sentiment payload shape
///
/// A zero score and an empty tone are both treated as missing values, so
/// the caller never sees a half-filled sentiment object.
fn parse_sentiment(content: &str) -> InsightResult<SentimentInsight> {
    let parsed: SentimentInsight =
        serde_json::from_str(content).map_err(|e| InsightError::Format(e.to_string()))?;

    if parsed.score == 0.0 || parsed.tone.trim().is_empty() {
        return Err(InsightError::Format(
            "score and tone must be present and non-empty".to_string(),
        ));
    }

    Ok(parsed)
}

fn parse_commentary(content: &str) -> InsightResult<SeoCommentary> {
    serde_json::from_str(content).map_err(|e| InsightError::Format(e.to_string()))
}

// Wire types for the chat-completions API

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponseRaw {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}
