//! Storage module for websites and analysis reports
//!
//! Two records, keyed by auto-incrementing integer ids: the submitted
//! Website (with its lifecycle status) and the immutable Report produced by
//! a successful analysis. The backend is a capability trait with an
//! in-memory implementation and a SQLite implementation behind it.

mod memory;
mod schema;
mod sqlite;
mod traits;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::{NewReport, Storage, StorageError, StorageResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a submitted website
///
/// Created as `Pending`, mutated exactly once to `Completed` or `Failed`
/// after the analysis finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    Pending,
    Completed,
    Failed,
}

impl WebsiteStatus {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// A submitted website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: i64,
    pub url: String,
    pub status: WebsiteStatus,
    pub created_at: DateTime<Utc>,
}

/// The persisted aggregate of one successful analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub website_id: i64,
    pub seo_score: u8,
    pub performance_score: u8,
    pub security_score: u8,
    pub accessibility_score: u8,
    pub sentiment_score: u8,
    pub details: ReportDetails,
    pub created_at: DateTime<Utc>,
}

/// Per-category findings plus the sentiment payload, persisted and returned
/// verbatim as the report's `details` JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDetails {
    pub seo: CategoryDetails,
    pub performance: CategoryDetails,
    pub security: CategoryDetails,
    pub accessibility: CategoryDetails,
    pub sentiment: SentimentDetails,
}

/// Issue and suggestion lists for one audit category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Sentiment payload as returned by the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDetails {
    pub score: f64,
    pub tone: String,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_status_roundtrip() {
        for status in &[
            WebsiteStatus::Pending,
            WebsiteStatus::Completed,
            WebsiteStatus::Failed,
        ] {
            let db_str = status.to_db_string();
            let parsed = WebsiteStatus::from_db_string(db_str);
            assert_eq!(Some(*status), parsed);
        }
    }

    #[test]
    fn test_website_status_invalid() {
        assert_eq!(WebsiteStatus::from_db_string("running"), None);
    }

    #[test]
    fn test_website_serializes_camel_case() {
        let website = Website {
            id: 1,
            url: "https://example.com".to_string(),
            status: WebsiteStatus::Pending,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&website).unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_report_details_json_shape() {
        let details = ReportDetails {
            seo: CategoryDetails {
                issues: vec!["Missing title tag".to_string()],
                suggestions: vec!["Add a descriptive <title> tag to the page".to_string()],
            },
            sentiment: SentimentDetails {
                score: 88.0,
                tone: "confident".to_string(),
                suggestions: vec![],
            },
            ..Default::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["seo"]["issues"][0], "Missing title tag");
        assert_eq!(json["sentiment"]["tone"], "confident");
        assert!(json["performance"]["issues"].as_array().unwrap().is_empty());
    }
}
