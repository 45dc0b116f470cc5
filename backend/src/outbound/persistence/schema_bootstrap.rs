//! Startup DDL ensuring the users table exists.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

/// DDL applied on startup. Idempotent; existing tables are left untouched.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id SERIAL PRIMARY KEY, \
    name TEXT NOT NULL, \
    email TEXT NOT NULL\
)";

/// Failures while bootstrapping the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The DDL statement was rejected.
    #[error("failed to create users table: {0}")]
    Ddl(#[from] diesel::result::Error),
}

/// Create the users table when missing.
///
/// # Errors
///
/// Returns [`SchemaError`] when the database is unreachable or rejects the
/// statement. Callers treat this as fatal.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.get().await?;
    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(&mut conn)
        .await?;
    info!("users table ready");
    Ok(())
}
