//! Server harness and shared world for the users behavioural suite.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` ensures the server
//! is stopped even if a test panics.

use std::cell::RefCell;
use std::future::Future;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpServer, web};
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use users_api::domain::User;
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::state::HttpState;
use users_api::server::{AppDependencies, build_app};
use users_api::test_support::InMemoryUserRepository;

pub(crate) const PREFIX: &str = "/api/rust";

pub(crate) struct UsersWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) repository: Arc<InMemoryUserRepository>,
    pub(crate) current_user: Option<User>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_headers: Option<HeaderMap>,
    pub(crate) last_body: Option<Value>,
}

pub(crate) type SharedWorld = Rc<RefCell<UsersWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

pub(crate) fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we hold the
    // world borrow while calling `block_on`. The future must not borrow it.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

/// Drive `operation` on the world's runtime, passing the server base URL.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

async fn spawn_users_server(
    repository: Arc<InMemoryUserRepository>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let health_state = web::Data::new(HealthState::new());
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: web::Data::new(HttpState::from_repository(repository)),
        path_prefix: PREFIX.to_owned(),
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .disable_signals()
        .workers(1)
        .listen(listener)
        .map_err(|err| err.to_string())?
        .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    health_state.mark_ready();

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let repository = Arc::new(InMemoryUserRepository::default());

    let (base_url, server) = local
        .block_on(&runtime, spawn_users_server(repository.clone()))
        .expect("server should start");

    let world = Rc::new(RefCell::new(UsersWorld {
        runtime,
        local,
        base_url,
        server,
        repository,
        current_user: None,
        last_status: None,
        last_headers: None,
        last_body: None,
    }));

    WorldFixture { world }
}
