//! LLM insight client
//!
//! Semantic analysis (sentiment, SEO commentary) is delegated to an external
//! language model. The capability is a trait so the pipeline can run against
//! deterministic fakes in tests; the shipped implementation talks to an
//! OpenAI-compatible chat-completions API.

mod openai;
pub mod testing;

pub use openai::OpenAiInsight;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by insight calls
///
/// A single call, a single failure path: no retries or backoff anywhere.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("API quota exceeded. Please try again later.")]
    QuotaExceeded,

    #[error("API key rejected: {0}")]
    Auth(String),

    #[error("Invalid response format from model: {0}")]
    Format(String),

    #[error("Insight call failed: {0}")]
    Call(String),
}

/// Result type for insight operations
pub type InsightResult<T> = std::result::Result<T, InsightError>;

/// Sentiment analysis of the page's visible text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentInsight {
    /// Sentiment score on the model's 1-100 scale
    pub score: f64,

    /// Overall tone description
    pub tone: String,

    /// Content improvement suggestions
    pub suggestions: Vec<String>,
}

/// SEO commentary on the page's raw HTML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoCommentary {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Capability interface for the language-model oracle
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Analyzes the sentiment and tone of the page's visible text
    async fn summarize_sentiment(&self, text: &str) -> InsightResult<SentimentInsight>;

    /// Produces SEO issues and suggestions for the page's HTML
    async fn suggest_seo(&self, html: &str) -> InsightResult<SeoCommentary>;
}
