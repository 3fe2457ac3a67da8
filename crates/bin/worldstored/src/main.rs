//! # worldstored: worldstore daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the JSON file repository (adapter)
//! - Construct the world service, injecting the repository via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer, no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;
use worldstore_adapter_http_axum::router::RouterOptions;
use worldstore_adapter_http_axum::state::AppState;
use worldstore_adapter_storage_json_fs::JsonFileWorldRepository;
use worldstore_app::services::world_service::WorldService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Storage
    let repo = JsonFileWorldRepository::new(&config.storage.path);
    if !repo.path().exists() {
        tracing::warn!(
            path = %repo.path().display(),
            "world document does not exist yet, GET /api/world will fail until the first save"
        );
    }

    // Services
    let world_service = WorldService::new(repo);

    // HTTP
    let state = AppState::new(world_service);
    let options = RouterOptions {
        max_body_bytes: config.server.max_body_bytes,
    };
    let app = worldstore_adapter_http_axum::router::build(state, &options);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        document = %config.storage.path.display(),
        "worldstored listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("worldstored stopped");
    Ok(())
}

/// Resolve when SIGINT (ctrl-c) or, on unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
