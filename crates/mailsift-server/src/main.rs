//! MailSift Relay Server
//!
//! This server provides:
//! - Email classification on /api/analyze via a hosted zero-shot model
//! - Domain/URL PII screening on /api/domain/check via a hosted NER model
//! - Liveness and readiness probes on /healthz and /readyz
//!
//! Usage:
//! ```bash
//! # With config file
//! mailsift-server --config config.yaml
//!
//! # Or with environment variables
//! HUGGINGFACE_API_TOKEN=hf_your_token mailsift-server
//!
//! # With both (env vars override config)
//! HUGGINGFACE_API_TOKEN=hf_your_token mailsift-server --config config.yaml
//! ```
//!
//! Test with:
//! ```bash
//! curl http://localhost:8080/api/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{
//!     "sender": "noreply@example.com",
//!     "subject": "You won a prize",
//!     "body": "Click here to claim it"
//!   }'
//!
//! curl http://localhost:8080/api/domain/check \
//!   -H "Content-Type: application/json" \
//!   -d '{"domain": "example.com"}'
//! ```

mod config;

use axum::http::{HeaderValue, Method, header};
use clap::{Parser, Subcommand};
use config::ServerConfig;
use mailsift_egress::{InferenceClient, InferenceConfig};
use mailsift_ingress::{
    analyze, domain_check,
    health::{self, HealthState},
    middleware::request_id_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// MailSift Server - email and domain safety analysis relay
#[derive(Parser)]
#[command(name = "mailsift-server")]
#[command(about = "MailSift relay for email classification and domain PII screening", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE", env = "MAILSIFT_CONFIG")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MailSift server (default if no command specified)
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) | None => {}
    }

    // Load configuration
    let mut config = if let Some(config_path) = cli.config {
        ServerConfig::from_file(&config_path).map_err(|e| anyhow::anyhow!(e.to_string()))?
    } else {
        ServerConfig::default()
    };

    // Merge environment variables (they override config file)
    config.merge_env();

    // Initialize tracing with the configured level
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let filter = EnvFilter::new(format!("{}", log_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Initializing MailSift relay");

    // Build the inference connector (shared, immutable after startup)
    let api_token = config.inference.api_token.clone().unwrap_or_default();
    if api_token.is_empty() {
        warn!("No inference API token configured - upstream calls will be rejected");
        warn!("    Set HUGGINGFACE_API_TOKEN or add api_token to the config file");
    }

    let inference_config = InferenceConfig::new(api_token)
        .with_base_url(config.inference.base_url.clone())
        .with_zero_shot_model(config.inference.zero_shot_model.clone())
        .with_ner_model(config.inference.ner_model.clone());
    let client = Arc::new(InferenceClient::new(inference_config)?);

    info!("Inference endpoint: {}", config.inference.base_url);
    info!("Zero-shot model:    {}", config.inference.zero_shot_model);
    info!("NER model:          {}", config.inference.ner_model);

    // Cross-origin access is restricted to the single configured frontend
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    info!("CORS origin: {}", config.frontend_origin);

    let health_state = HealthState {
        upstream_configured: client.has_credentials(),
    };

    let app = analyze::router(client.clone())
        .merge(domain_check::router(client))
        .merge(health::router(health_state))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("");
    info!("MailSift relay listening on http://{}", addr);
    info!("  - Email analysis:  http://{}/api/analyze", addr);
    info!("  - Domain check:    http://{}/api/domain/check", addr);
    info!("  - Health check:    http://{}/healthz", addr);
    info!("  - Readiness check: http://{}/readyz", addr);
    info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
