//! HTTP fetcher for the page under analysis
//!
//! One shared client, one GET per analysis. Redirects are left to the
//! transport's default policy; timeouts come from the fetcher configuration.

use crate::config::FetcherConfig;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while retrieving the page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after any transport-level redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Response headers (inspected by the security audit)
    pub headers: HeaderMap,

    /// Raw body text
    pub body: String,
}

/// Builds the HTTP client used for page fetches
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a single GET and returns the body plus response headers
///
/// Fails on transport errors, timeouts, and any non-2xx status. No retries.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    tracing::debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let headers = response.headers().clone();

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "page fetched");

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        headers,
        body,
    })
}
