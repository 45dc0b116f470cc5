//! Users API entry-point: loads settings, prepares storage and serves HTTP.

use std::process::ExitCode;
use std::sync::Arc;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig, ensure_schema};
use users_api::server::{ServerConfig, StartupError, create_server};
use users_api::settings::AppSettings;

async fn run() -> Result<(), StartupError> {
    let settings = AppSettings::load_from_args(std::env::args_os())?;
    let bind_addr = settings.bind_addr()?;
    let path_prefix = settings.path_prefix()?;
    let pool_config =
        PoolConfig::new(settings.database_url()?).with_max_size(settings.max_connections());

    let pool = DbPool::new(pool_config).await?;
    ensure_schema(&pool).await?;

    let repository = Arc::new(DieselUserRepository::new(pool));
    let config = ServerConfig::new(bind_addr, repository).with_path_prefix(path_prefix);
    info!(
        %bind_addr,
        path_prefix = config.path_prefix(),
        max_connections = settings.max_connections(),
        "starting users API"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result.map_err(StartupError::from)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "users API failed to start");
            ExitCode::FAILURE
        }
    }
}
