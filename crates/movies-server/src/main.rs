//! Binary entrypoint for the movies HTTP server.
//!
//! Reads configuration from environment variables:
//! - `MOVIES_HOST`: Listen address (default: "0.0.0.0")
//! - `MOVIES_PORT`: Listen port (default: "3000")
//! - `MOVIES_SEED`: Start from the fixed seed set (default: "true")

use movies_server::config::ServerConfig;
use movies_server::router::build_router;
use movies_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;

    let state = if config.seed {
        AppState::seeded()
    } else {
        AppState::empty()
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!("movies server starting on {} (seeded: {})", addr, config.seed);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
