//! Bank Marketing Classifier API - Main Entry Point

use bank_marketing_api::server::{run_server, ServerConfig};
use clap::Parser;

/// HTTP inference service for the bank-marketing term-deposit classifier.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Address to bind (overrides API_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides API_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the serialized classifier artifact (overrides MODEL_PATH)
    #[arg(long)]
    model_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_marketing_api=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::default();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(model_path) = cli.model_path {
        config.model_path = model_path;
    }

    run_server(config).await
}
