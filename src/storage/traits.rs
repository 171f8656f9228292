//! Storage traits and error types
//!
//! The trait is the capability contract from the analysis pipeline's point
//! of view; callers never depend on a concrete backend. Methods take `&self`
//! so a single shared instance can serve concurrent requests — backends
//! serialize their id counters internally.

use crate::storage::{Report, ReportDetails, Website, WebsiteStatus};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Website not found: {0}")]
    WebsiteNotFound(i64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Fields of a report before id and timestamp assignment
#[derive(Debug, Clone)]
pub struct NewReport {
    pub website_id: i64,
    pub seo_score: u8,
    pub performance_score: u8,
    pub security_score: u8,
    pub accessibility_score: u8,
    pub sentiment_score: u8,
    pub details: ReportDetails,
}

/// Trait for storage backend implementations
pub trait Storage: Send + Sync {
    /// Creates a website with the next integer id and status `pending`
    fn create_website(&self, url: &str) -> StorageResult<Website>;

    /// Gets a website by id
    fn get_website(&self, id: i64) -> StorageResult<Option<Website>>;

    /// Updates a website's status, returning the updated record
    ///
    /// # Errors
    ///
    /// `StorageError::WebsiteNotFound` for unknown ids
    fn update_website_status(&self, id: i64, status: WebsiteStatus) -> StorageResult<Website>;

    /// Creates a report with the next integer id
    fn create_report(&self, report: NewReport) -> StorageResult<Report>;

    /// Gets a report by id
    fn get_report(&self, id: i64) -> StorageResult<Option<Report>>;

    /// Gets the report linked to a website, if any
    ///
    /// When multiple reports reference the same website the one with the
    /// lowest id wins; the pipeline only ever creates one per website.
    fn get_report_for_website(&self, website_id: i64) -> StorageResult<Option<Report>>;
}
