//! Users REST backend.
//!
//! The crate is laid out as a small hexagon:
//! - [`domain`] holds the `User` entity, the error model and the ports.
//! - [`inbound`] exposes the ports over HTTP with actix-web.
//! - [`outbound`] implements the persistence port with Diesel on PostgreSQL.
//! - [`middleware`] carries the cross-cutting request wrappers.
//! - [`server`] assembles routes and middleware into an actix `App`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Cors, JsonContentType, Trace};
