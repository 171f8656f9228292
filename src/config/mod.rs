//! Configuration module for SiteGauge
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field carries a default, so the analyzer can run without a config file.
//!
//! # Example
//!
//! ```no_run
//! use sitegauge::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitegauge.toml")).unwrap();
//! println!("Serving on: {}", config.server.bind_address);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, InsightConfig, ServerConfig, StorageConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
