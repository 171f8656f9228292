use crate::config::types::{Config, FetcherConfig, InsightConfig, ServerConfig, StorageConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_insight_config(&config.insight)?;
    validate_storage_config(&config.storage)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|_| {
            ConfigError::Validation(format!(
                "bind-address must be a socket address like 127.0.0.1:8080, got '{}'",
                config.bind_address
            ))
        })?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "fetcher timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates insight client configuration
fn validate_insight_config(config: &InsightConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid insight base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "insight base-url must be http(s), got '{}'",
            config.base_url
        )));
    }

    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation("model cannot be empty".to_string()));
    }

    if config.api_key_env.trim().is_empty() {
        return Err(ConfigError::Validation(
            "api-key-env cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "insight timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates storage configuration
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.database_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database-path cannot be empty when set; omit it for in-memory storage".to_string(),
            ));
        }
    }
    Ok(())
}
