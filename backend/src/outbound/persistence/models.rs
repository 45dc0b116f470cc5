//! Internal Diesel row structs for the users table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::{User, UserDraft, UserId};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), UserDraft::new(row.name, row.email))
    }
}

/// Insertable struct for creating new user records; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset replacing both mutable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email(),
        }
    }
}

impl<'a> From<&'a UserDraft> for UserUpdate<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email(),
        }
    }
}
