//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the [`UserRepository`] port backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! - Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//!   stay private to this module.
//! - Database errors are mapped to [`UserPersistenceError`] before leaving
//!   the adapter.
//!
//! # Example
//!
//! ```ignore
//! use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig, ensure_schema};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```
//!
//! [`UserRepository`]: crate::domain::ports::UserRepository
//! [`UserPersistenceError`]: crate::domain::ports::UserPersistenceError

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod schema_bootstrap;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
pub use schema_bootstrap::{CREATE_USERS_TABLE, SchemaError, ensure_schema};
