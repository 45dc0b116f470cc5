//! Driving port for user reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with the given identifier or a not-found error.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
