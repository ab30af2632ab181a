//! hello-devops entry point.
//!
//! Initializes tracing, resolves the listening port, builds the Axum router
//! and serves it until the process is stopped.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_devops::config::{log_filter, HttpServerConfig, LogFormat, DEFAULT_LOG_FILTER};
use hello_devops::{create_router, start_server};

/// hello-devops: health check and greeting over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-devops", version, about)]
struct Args {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "hello_devops=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let filter_directives = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(log_filter(&filter_directives));
    match args.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    let config = HttpServerConfig::from_env()?.with_port_override(args.port);
    tracing::debug!(host = %config.host, port = config.port, "Loaded configuration");

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
