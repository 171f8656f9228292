//! Analysis pipeline
//!
//! This module sequences a full website analysis:
//! 1. Fetch the page (body + response headers)
//! 2. Parse the HTML and validate that there is analyzable content
//! 3. Run the four static audits
//! 4. Request sentiment and SEO commentary from the insight provider
//! 5. Assemble the unified outcome
//!
//! Any failure aborts the whole analysis; nothing is partially assembled.

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage};
pub use parser::{PageDocument, ValidationError};

use crate::audit;
use crate::insight::InsightProvider;
use crate::storage::{CategoryDetails, ReportDetails, SentimentDetails};
use crate::Result;
use serde::Serialize;

/// The assembled result of one analysis run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub seo_score: u8,
    pub performance_score: u8,
    pub security_score: u8,
    pub accessibility_score: u8,
    /// The model's sentiment score, passed through unmodified (integer-clamped)
    pub sentiment_score: u8,
    pub details: ReportDetails,
}

/// Runs the complete analysis pipeline for a single URL
///
/// The two insight calls have no data dependency on each other and run
/// concurrently; every other stage is strictly sequential.
///
/// # Arguments
///
/// * `client` - Shared HTTP client for the page fetch
/// * `insight` - The LLM insight provider
/// * `url` - The URL to analyze
///
/// # Returns
///
/// * `Ok(AnalysisOutcome)` - All scores and details
/// * `Err(GaugeError)` - The stage that failed, unwrapped at the API boundary
pub async fn analyze_website(
    client: &reqwest::Client,
    insight: &dyn InsightProvider,
    url: &str,
) -> Result<AnalysisOutcome> {
    tracing::info!(url, "starting analysis");

    let page = fetch_page(client, url).await?;

    // scraper's Html is not Send, so the document stays inside this block
    // and only plain data crosses the await points below.
    let (findings, visible_text) = {
        let doc = PageDocument::parse(&page.body)?;
        let findings = audit::run(&doc, &page.headers);
        (findings, doc.visible_text().to_string())
    };

    tracing::debug!(
        seo = findings.seo.score,
        performance = findings.performance.score,
        security = findings.security.score,
        accessibility = findings.accessibility.score,
        "static audits complete"
    );

    let (sentiment, commentary) = tokio::try_join!(
        insight.summarize_sentiment(&visible_text),
        insight.suggest_seo(&page.body),
    )?;

    let sentiment_score = sentiment.score.round().clamp(0.0, 100.0) as u8;

    let audit::StaticAudit {
        seo,
        performance,
        security,
        accessibility,
    } = findings;

    let outcome = AnalysisOutcome {
        seo_score: seo.score,
        performance_score: performance.score,
        security_score: security.score,
        accessibility_score: accessibility.score,
        sentiment_score,
        details: ReportDetails {
            // Heuristic findings first, model commentary appended
            seo: CategoryDetails {
                issues: [seo.issues, commentary.issues].concat(),
                suggestions: [seo.suggestions, commentary.suggestions].concat(),
            },
            performance: performance.into(),
            security: security.into(),
            accessibility: accessibility.into(),
            sentiment: SentimentDetails {
                score: sentiment.score,
                tone: sentiment.tone,
                suggestions: sentiment.suggestions,
            },
        },
    };

    tracing::info!(url, sentiment_score, "analysis complete");

    Ok(outcome)
}
