//! SiteGauge: a website quality and sentiment analyzer
//!
//! This crate fetches a web page, runs static HTML heuristics
//! (SEO/performance/security/accessibility), delegates sentiment and SEO
//! commentary to a language model, and persists the combined report behind
//! a small REST API.

pub mod analyzer;
pub mod audit;
pub mod config;
pub mod insight;
pub mod server;
pub mod storage;

use thiserror::Error;

/// Main error type for SiteGauge operations
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] analyzer::FetchError),

    #[error(transparent)]
    Validation(#[from] analyzer::ValidationError),

    #[error(transparent)]
    Insight(#[from] insight::InsightError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for SiteGauge operations
pub type Result<T> = std::result::Result<T, GaugeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{analyze_website, AnalysisOutcome};
pub use config::Config;
pub use insight::{InsightProvider, OpenAiInsight};
pub use storage::{MemoryStorage, Report, SqliteStorage, Storage, Website, WebsiteStatus};
