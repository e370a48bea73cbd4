//! Billboard Server - billboard advertising management platform
//!
//! REST API server for billboard inventory, booking requests and analytics.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billboard_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{people_counter::SimulatedPeopleCounter, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("billboard_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Billboard Server v{}", env!("CARGO_PKG_VERSION"));

    // In-memory store, seeded with the admin user and sample data
    let repository = Repository::seeded(&config.seed).await?;

    tracing::warn!(
        "Admin login compares plaintext passwords and issues no session; \
         do not expose this server without a real authentication layer"
    );

    let counter = Arc::new(SimulatedPeopleCounter::new(&config.counter)?);
    let services = Services::new(repository, counter);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
