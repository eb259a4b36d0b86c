//! manchor-sa - Stress Analysis Service
//!
//! MindAnchor backend service providing text-based stress classification
//! through a tokenizer, lexicon feature extraction, and a linear
//! classifier over an immutable model snapshot.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manchor_common::config::{self, TomlConfig, DEFAULT_MAX_INPUT_CHARS};
use manchor_sa::model::{ModelHandle, ModelSnapshot};
use manchor_sa::AppState;

/// Command-line arguments for manchor-sa
#[derive(Parser, Debug)]
#[command(name = "manchor-sa")]
#[command(about = "Stress analysis service for MindAnchor")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "MANCHOR_SA_PORT")]
    port: Option<u16>,

    /// Path to an external classifier model file (TOML)
    #[arg(short, long)]
    model: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manchor_sa=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load optional TOML config, then resolve settings through the tiers
    let toml_config = TomlConfig::load().context("Failed to load config file")?;
    let port = args.port.or(toml_config.port).unwrap_or(8000);
    let max_input_chars = toml_config
        .max_input_chars
        .unwrap_or(DEFAULT_MAX_INPUT_CHARS);
    let model_path =
        config::resolve_model_path(args.model.as_ref(), "MANCHOR_SA_MODEL", &toml_config);

    info!("Starting manchor-sa (Stress Analysis) service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Install the model before accepting traffic so /health reports ready
    // only once classification can actually succeed
    let model = ModelHandle::empty();
    let snapshot = match &model_path {
        Some(path) => {
            info!("Loading model from {}", path.display());
            ModelSnapshot::load_from_file(path).context("Failed to load model file")?
        }
        None => {
            info!("No model path configured, using built-in model");
            ModelSnapshot::builtin().context("Failed to parse built-in model")?
        }
    };
    info!(
        "Model '{}' installed ({} lexicon terms)",
        snapshot.name,
        snapshot.dimension()
    );
    model.install(snapshot);

    // Build router over shared state
    let state = AppState::new(model, model_path, max_input_chars);
    let app = manchor_sa::build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
