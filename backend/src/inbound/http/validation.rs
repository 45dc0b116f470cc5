//! Request decoding helpers for inbound HTTP adapters.
//!
//! Body decoding failures become `invalid_request` errors with the message
//! `Invalid input`. Path identifiers that do not parse as [`UserId`] are
//! reported as missing users without touching storage.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserId};

/// Client-facing message for undecodable request bodies.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
/// Client-facing message for unknown users.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Map a JSON extractor failure to a domain validation error.
pub fn invalid_input(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "rejecting undecodable request body");
    Error::invalid_request(INVALID_INPUT_MESSAGE).with_details(json!({
        "reason": err.to_string(),
    }))
}

/// JSON extractor configuration shared by every user route.
///
/// The request `Content-Type` is not enforced; any body is decoded as JSON.
pub fn json_config() -> JsonConfig {
    JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req: &HttpRequest| invalid_input(&err).into())
}

/// Parse a raw path segment into a [`UserId`].
///
/// # Errors
///
/// Returns a `not_found` error when the segment is not a 32-bit integer.
pub fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<UserId>().map_err(|err| {
        debug!(raw, error = %err, "unparseable user id in path");
        Error::not_found(USER_NOT_FOUND_MESSAGE)
    })
}
