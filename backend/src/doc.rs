//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user endpoints (under the default `/api/rust`
//! prefix), the health probes and the payload schemas. The document is
//! exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User, UserId};
use crate::inbound::http::users::{DeleteUserResponse, UserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD operations over the users table, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserId,
        UserRequest,
        DeleteUserResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
