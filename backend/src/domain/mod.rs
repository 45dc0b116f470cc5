//! Domain primitives, ports and services.
//!
//! Purpose: define the `User` entity, the transport-agnostic error model and
//! the hexagonal ports. Nothing here depends on actix-web or Diesel.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`UserDraft`]: the single entity and its inputs.
//! - [`Error`], [`ErrorCode`]: error payload shared by all operations.
//! - [`TraceId`]: request-scoped correlation identifier.
//! - [`UsersService`]: implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId, UserIdError};
pub use self::users_service::UsersService;
