//! Users domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! a [`UserRepository`]. Storage failures are logged here with the operation
//! and identifier, then reduced to client-safe errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

const USER_NOT_FOUND: &str = "User not found";

/// Service backing every users endpoint.
#[derive(Clone)]
pub struct UsersService {
    repository: Arc<dyn UserRepository>,
}

impl UsersService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Look a user up, folding storage failures into not-found.
    async fn require_user(&self, id: UserId, operation: &'static str) -> Result<User, Error> {
        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                debug!(user_id = %id, operation, "user not found");
                Err(Error::not_found(USER_NOT_FOUND))
            }
            Err(err) => {
                log_persistence_error(&err, operation, Some(id));
                Err(Error::not_found(USER_NOT_FOUND))
            }
        }
    }
}

fn log_persistence_error(err: &UserPersistenceError, operation: &'static str, id: Option<UserId>) {
    match id {
        Some(user_id) => error!(error = %err, operation, user_id = %user_id, "user storage failed"),
        None => error!(error = %err, operation, "user storage failed"),
    }
}

#[async_trait]
impl UsersQuery for UsersService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(|err| {
            log_persistence_error(&err, "list_users", None);
            Error::internal("Error fetching users")
        })
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.require_user(id, "find_user").await
    }
}

#[async_trait]
impl UsersCommand for UsersService {
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self.repository.insert(&draft).await.map_err(|err| {
            log_persistence_error(&err, "create_user", None);
            Error::internal("Error creating user")
        })?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let affected = self.repository.update(id, &draft).await.map_err(|err| {
            log_persistence_error(&err, "update_user", Some(id));
            Error::internal("Error updating user")
        })?;
        if affected == 0 {
            debug!(user_id = %id, "update matched no rows");
        }

        // Re-read so the response reflects what storage holds.
        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(Error::not_found("User not found after update")),
            Err(err) => {
                log_persistence_error(&err, "update_user_refetch", Some(id));
                Err(Error::not_found("User not found after update"))
            }
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        // Existence check and delete are separate statements; a concurrent
        // delete of the same id makes the second statement a no-op.
        self.require_user(id, "delete_user").await?;
        self.repository.delete(id).await.map_err(|err| {
            log_persistence_error(&err, "delete_user", Some(id));
            Error::internal("Error deleting user")
        })?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
