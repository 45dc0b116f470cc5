//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::settings::DEFAULT_PATH_PREFIX;

/// Builder-style configuration for creating the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) path_prefix: String,
    pub(crate) repository: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Construct a configuration serving `repository` on `bind_addr` under the
    /// default prefix.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<dyn UserRepository>) -> Self {
        Self {
            bind_addr,
            path_prefix: DEFAULT_PATH_PREFIX.to_owned(),
            repository,
        }
    }

    /// Mount the user routes under `prefix` (already normalised).
    #[must_use]
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the route prefix.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }
}
