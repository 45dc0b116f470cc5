//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user repository using Diesel ORM
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
