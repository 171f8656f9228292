//! Deterministic insight providers for tests
//!
//! The pipeline is exercised end-to-end without a live model by swapping in
//! these doubles wherever an `InsightProvider` is expected.

use super::{InsightError, InsightProvider, InsightResult, SentimentInsight, SeoCommentary};
use async_trait::async_trait;

/// Returns fixed payloads on every call
#[derive(Debug, Clone)]
pub struct CannedInsight {
    pub sentiment: SentimentInsight,
    pub commentary: SeoCommentary,
}

impl Default for CannedInsight {
    fn default() -> Self {
        Self {
            sentiment: SentimentInsight {
                score: 85.0,
                tone: "positive".to_string(),
                suggestions: vec!["Add a clear call to action".to_string()],
            },
            commentary: SeoCommentary {
                issues: vec!["Content is thin for the target keywords".to_string()],
                suggestions: vec!["Expand the main copy".to_string()],
            },
        }
    }
}

#[async_trait]
impl InsightProvider for CannedInsight {
    async fn summarize_sentiment(&self, _text: &str) -> InsightResult<SentimentInsight> {
        Ok(self.sentiment.clone())
    }

    async fn suggest_seo(&self, _html: &str) -> InsightResult<SeoCommentary> {
        Ok(self.commentary.clone())
    }
}

/// Which error a [`FailingInsight`] produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedFailure {
    Quota,
    Auth,
    Format,
    Call,
}

/// Fails every call with the configured error
#[derive(Debug, Clone, Copy)]
pub struct FailingInsight {
    pub failure: CannedFailure,
}

impl FailingInsight {
    pub fn new(failure: CannedFailure) -> Self {
        Self { failure }
    }

    fn error(&self) -> InsightError {
        match self.failure {
            CannedFailure::Quota => InsightError::QuotaExceeded,
            CannedFailure::Auth => InsightError::Auth("invalid api key".to_string()),
            CannedFailure::Format => InsightError::Format("not json".to_string()),
            CannedFailure::Call => InsightError::Call("connection reset".to_string()),
        }
    }
}

#[async_trait]
impl InsightProvider for FailingInsight {
    async fn summarize_sentiment(&self, _text: &str) -> InsightResult<SentimentInsight> {
        Err(self.error())
    }

    async fn suggest_seo(&self, _html: &str) -> InsightResult<SeoCommentary> {
        Err(self.error())
    }
}
