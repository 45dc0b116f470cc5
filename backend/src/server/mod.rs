//! Server construction and middleware wiring.
//!
//! [`build_app`] is shared by the binary and the integration suites so both
//! exercise the same routes and middleware stack.

mod config;

pub use config::ServerConfig;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::middleware::{Cors, JsonContentType, Trace};
use crate::outbound::persistence::{PoolError, SchemaError};
use crate::settings::SettingsError;

/// Fatal failures while bootstrapping the process.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Settings were missing or invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The users table could not be ensured.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The listener could not be bound or the server failed.
    #[error("HTTP server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub path_prefix: String,
}

async fn unknown_route() -> ApiResult<web::Json<()>> {
    Err(Error::not_found("Resource not found"))
}

/// Assemble the application: health probes at the root, user routes under
/// the configured prefix, and the Trace, CORS and JSON content type wrappers.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        path_prefix,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(JsonContentType)
        .wrap(Cors)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .service(web::scope(&path_prefix).configure(users::configure))
        .default_service(web::to(unknown_route))
}

/// Construct an Actix HTTP server from `config`.
///
/// Readiness flips once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        path_prefix,
        repository,
    } = config;
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: web::Data::new(HttpState::from_repository(repository)),
        path_prefix,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "users API listening");
    health_state.mark_ready();
    Ok(server)
}
