//! Driven port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage operations backing the users API.
///
/// Each method maps to exactly one SQL statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in storage-defined order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new row and return it with the generated identifier.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Replace name and email of the matching row, returning the affected row count.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserPersistenceError>;

    /// Delete the matching row, returning the affected row count.
    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError>;
}
