//! User entity and its identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Errors raised while parsing a [`UserId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    Empty,
    /// The identifier was not a 32-bit integer.
    #[error("user id must be an integer, got {raw:?}")]
    NotAnInteger { raw: String },
}

/// Storage-generated user identifier (`SERIAL` primary key).
///
/// Serialises as a bare JSON number.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.as_i32(), 42);
/// assert!("forty-two".parse::<UserId>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(example = 1)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier read from storage.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UserIdError::Empty);
        }
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| UserIdError::NotAnInteger { raw: s.to_owned() })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name and email supplied when creating or replacing a user.
///
/// No content validation happens here: empty strings are stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Build a draft from its two text fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Display name to persist.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address to persist.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes afterwards.
///
/// Serialises as `{"id": 1, "name": "Ada", "email": "ada@x.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    #[schema(example = "Ada")]
    name: String,
    #[schema(example = "ada@x.com")]
    email: String,
}

impl User {
    /// Build a user from its identifier and draft fields.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
