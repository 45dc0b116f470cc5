//! Diesel and pool error translation into [`UserPersistenceError`].

use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::UserPersistenceError;

/// Map pool failures to connection errors.
pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    debug!(error = %error, "database pool checkout failed");
    UserPersistenceError::connection(error.message())
}

/// Map Diesel failures to query or connection errors.
///
/// Driver detail is logged at debug level and kept out of the returned
/// message.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}
