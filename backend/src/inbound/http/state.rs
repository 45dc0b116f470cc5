//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UsersService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Wire both driving ports to one [`UsersService`] over `repository`.
    ///
    /// # Examples
    /// ```ignore
    /// let state = HttpState::from_repository(Arc::new(DieselUserRepository::new(pool)));
    /// ```
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Self {
        let service = Arc::new(UsersService::new(repository));
        Self::new(service.clone(), service)
    }
}
