//! SiteGauge main entry point
//!
//! Command-line interface: serve the REST API (default), validate the
//! configuration, or analyze a single URL and print the report JSON.

use anyhow::Context;
use clap::Parser;
use sitegauge::analyzer::build_http_client;
use sitegauge::config::{load_config_with_hash, Config};
use sitegauge::insight::OpenAiInsight;
use sitegauge::server::{serve, AppState};
use sitegauge::storage::{MemoryStorage, SqliteStorage, Storage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// SiteGauge: website quality and sentiment analyzer
///
/// SiteGauge fetches a page, scores it with static SEO, performance,
/// security, and accessibility heuristics, asks a language model for
/// sentiment and SEO commentary, and serves the combined reports over a
/// small REST API.
#[derive(Parser, Debug)]
#[command(name = "sitegauge")]
#[command(version)]
#[command(about = "Website quality and sentiment analyzer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show effective settings without serving
    #[arg(long, conflicts_with = "analyze")]
    check: bool,

    /// Analyze a single URL and print the report JSON instead of serving
    #[arg(long, value_name = "URL")]
    analyze: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) =
                load_config_with_hash(path).context("failed to load configuration")?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    // Handle different modes
    if cli.check {
        handle_check(&config);
        return Ok(());
    }

    if let Some(url) = &cli.analyze {
        return handle_analyze(&config, url).await;
    }

    handle_serve(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegauge=info,warn"),
            1 => EnvFilter::new("sitegauge=debug,tower_http=debug,info"),
            2 => EnvFilter::new("sitegauge=trace,tower_http=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --check mode: validates config and shows effective settings
fn handle_check(config: &Config) {
    println!("=== SiteGauge Configuration Check ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);

    println!("\nInsight:");
    println!("  Base URL: {}", config.insight.base_url);
    println!("  Model: {}", config.insight.model);
    println!("  API key env var: {}", config.insight.api_key_env);
    println!("  Timeout: {}s", config.insight.timeout_secs);

    println!("\nStorage:");
    match &config.storage.database_path {
        Some(path) => println!("  SQLite database: {}", path),
        None => println!("  In-memory (records are lost on restart)"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --analyze mode: runs the pipeline once and prints the outcome
async fn handle_analyze(config: &Config, url: &str) -> anyhow::Result<()> {
    let client = build_http_client(&config.fetcher).context("failed to build HTTP client")?;
    let insight = OpenAiInsight::from_config(&config.insight)?;

    let outcome = sitegauge::analyze_website(&client, &insight, url).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// Handles the default mode: serves the REST API
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    let storage: Arc<dyn Storage> = match &config.storage.database_path {
        Some(path) => {
            tracing::info!("Using SQLite storage at: {}", path);
            Arc::new(SqliteStorage::new(Path::new(path))?)
        }
        None => {
            tracing::info!("Using in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    };

    let insight = Arc::new(OpenAiInsight::from_config(&config.insight)?);
    let http = build_http_client(&config.fetcher).context("failed to build HTTP client")?;

    let state = AppState {
        storage,
        insight,
        http,
    };

    serve(state, &config.server.bind_address).await?;
    Ok(())
}
