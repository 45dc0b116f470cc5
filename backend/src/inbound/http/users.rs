//! Users API handlers.
//!
//! ```text
//! GET    {prefix}/users
//! POST   {prefix}/users        {"name":"Ada","email":"ada@x.com"}
//! GET    {prefix}/users/{id}
//! PUT    {prefix}/users/{id}   {"name":"Ada","email":"ada@x.com"}
//! DELETE {prefix}/users/{id}
//! ```
//!
//! The prefix defaults to `/api/rust`; the OpenAPI paths below assume it.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{json_config, parse_user_id};

/// Confirmation message returned by `DELETE {prefix}/users/{id}`.
pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// Request body for creating or replacing a user.
///
/// Unknown fields are rejected. An `id` key is accepted so clients can send
/// back a previously fetched record, but its value is ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserRequest {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@x.com")]
    pub email: String,
    /// Ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        UserDraft::new(value.name, value.email)
    }
}

/// Response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "User deleted")]
    pub message: String,
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/api/rust/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/rust/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Matching user", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user; storage assigns the identifier.
#[utoipa::path(
    post,
    path = "/api/rust/users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Invalid input", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Replace a user's name and email, returning the stored record.
#[utoipa::path(
    put,
    path = "/api/rust/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid input", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let draft = UserDraft::from(payload.into_inner());
    let id = parse_user_id(&path)?;
    let user = state.users_command.update_user(id, draft).await?;
    Ok(web::Json(user))
}

/// Delete a user after confirming it exists.
#[utoipa::path(
    delete,
    path = "/api/rust/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = parse_user_id(&path)?;
    state.users_command.delete_user(id).await?;
    Ok(web::Json(DeleteUserResponse {
        message: USER_DELETED_MESSAGE.to_owned(),
    }))
}

/// Register the user routes and their JSON decoding rules on a scope.
///
/// # Examples
/// ```ignore
/// App::new().service(web::scope("/api/rust").configure(users::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

#[cfg(test)]
mod tests;
