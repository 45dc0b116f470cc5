//! Turns domain [`Error`] values into the JSON error responses of the users
//! API.
//!
//! Client faults (`invalid_request`, `not_found`) are returned as produced by
//! the service. Storage faults surface as a generic 500 so connection strings
//! and SQL never leave the process; the original text stays in the logs.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result returned by every user handler.
pub type ApiResult<T> = Result<T, Error>;

/// Body message for any 500 response.
pub const REDACTED_MESSAGE: &str = "Internal server error";

const fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Body sent to the client: storage faults lose their message and details.
fn wire_body(failure: &Error) -> Error {
    if failure.code() != ErrorCode::InternalError {
        return failure.clone();
    }
    warn!(
        trace_id = failure.trace_id(),
        message = failure.message(),
        "redacting internal error"
    );
    let generic = Error::internal(REDACTED_MESSAGE);
    match failure.trace_id() {
        Some(trace_id) => generic.with_trace_id(trace_id),
        None => generic,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, trace_id));
        }
        response.json(wire_body(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error while serving users request");
        Self::internal(REDACTED_MESSAGE)
    }
}
