//! Route handlers
//!
//! `POST /api/analyze` runs the full pipeline inline and answers with both
//! record ids; the GET endpoints are plain reads for polling clients. Every
//! error body is `{"message": ...}`.

use crate::analyzer;
use crate::insight::InsightError;
use crate::server::AppState;
use crate::storage::{NewReport, Report, Website, WebsiteStatus};
use crate::GaugeError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub website_id: i64,
    pub report_id: i64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// Error responses with the status codes the UI contract expects
#[derive(Debug)]
pub(super) enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Submits a URL for analysis
///
/// The URL is syntax-checked before any record is written. A pending Website
/// is created up front; if any later stage fails the Website is marked
/// `failed` and no Report is persisted.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let url = parse_request_url(&request.url)?;

    let website = state
        .storage
        .create_website(url.as_str())
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let result: crate::Result<AnalyzeResponse> = async {
        let outcome =
            analyzer::analyze_website(&state.http, state.insight.as_ref(), url.as_str()).await?;

        let report = state.storage.create_report(NewReport {
            website_id: website.id,
            seo_score: outcome.seo_score,
            performance_score: outcome.performance_score,
            security_score: outcome.security_score,
            accessibility_score: outcome.accessibility_score,
            sentiment_score: outcome.sentiment_score,
            details: outcome.details,
        })?;

        state
            .storage
            .update_website_status(website.id, WebsiteStatus::Completed)?;

        Ok(AnalyzeResponse {
            website_id: website.id,
            report_id: report.id,
        })
    }
    .await;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            tracing::warn!(website_id = website.id, error = %error, "analysis failed");
            if let Err(update_error) = state
                .storage
                .update_website_status(website.id, WebsiteStatus::Failed)
            {
                tracing::error!(
                    website_id = website.id,
                    error = %update_error,
                    "could not mark website as failed"
                );
            }
            Err(ApiError::Internal(analysis_failure_message(&error)))
        }
    }
}

pub(super) async fn get_website(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Website>, ApiError> {
    state
        .storage
        .get_website(id)
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Website not found".to_string()))
}

pub(super) async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Report>, ApiError> {
    state
        .storage
        .get_report(id)
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))
}

pub(super) async fn get_website_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Report>, ApiError> {
    state
        .storage
        .get_report_for_website(id)
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))
}

fn parse_request_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw)
        .map_err(|_| ApiError::BadRequest("Please enter a valid URL".to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::BadRequest("Please enter a valid URL".to_string()));
    }

    Ok(url)
}

/// Maps pipeline failures to the user-facing message, distinguishing quota
/// exhaustion and credential problems from generic failure
fn analysis_failure_message(error: &GaugeError) -> String {
    match error {
        GaugeError::Insight(InsightError::QuotaExceeded) => {
            "API quota exceeded. Please try again later.".to_string()
        }
        GaugeError::Insight(InsightError::Auth(_)) => {
            "API key configuration error. Please check your API settings.".to_string()
        }
        other => format!("Failed to analyze website: {}", other),
    }
}
