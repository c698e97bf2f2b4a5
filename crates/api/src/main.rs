//! SentryView Console - Main Entry Point

use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::info;

use api::{create_router, init_logging, spawn_event_pump, AppState, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== SentryView Console v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    let state = Arc::new(AppState::new());

    let (events, reports) = mpsc::channel(64);
    let pump = spawn_event_pump(state.clone(), reports);

    let rng = match settings.rng_seed {
        Some(seed) => {
            info!(seed, "running with a fixed random seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let runner = simulation::spawn(
        state.store.clone(),
        settings.simulation_config(),
        rng,
        events,
    )?;

    let app = create_router(state);
    info!("Starting API server on {}", settings.bind_addr);
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the tick timer before exiting; the pump drains once the
    // report channel closes.
    let ticks = runner.shutdown().await;
    let _ = pump.await;
    info!(ticks, "shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
