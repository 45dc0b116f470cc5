//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the DDL issued by `schema_bootstrap::ensure_schema`.

diesel::table! {
    /// Users table. `id` is a `SERIAL` primary key generated on insert.
    users (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
    }
}
