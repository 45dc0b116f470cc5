//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing and deleting users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return it with its generated identifier.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace name and email, then return the persisted record.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete an existing user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
