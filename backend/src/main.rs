//! Backend entry-point: loads settings, builds the store pool and serves the
//! REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use qa_backend::inbound::http::health::HealthState;
use qa_backend::outbound::persistence::{DbPool, PoolConfig};
use qa_backend::settings::ServerSettings;
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| {
        error!(error = %err, "failed to load settings");
        std::io::Error::other(format!("failed to load settings: {err}"))
    })?;
    let bind_addr = settings.bind_addr()?;
    let database_url = settings.database_url()?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!("database pool ready");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
