//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockUserRepository, UserPersistenceError, UserRepository};
use crate::domain::{ErrorCode, UserId};
use crate::test_support::InMemoryUserRepository;

const PREFIX: &str = "/api/rust";

#[fixture]
fn repository() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::default())
}

fn test_app(
    repository: Arc<dyn UserRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from_repository(repository)))
        .service(web::scope(PREFIX).configure(configure))
}

fn uri(path: &str) -> String {
    format!("{PREFIX}{path}")
}

async fn send(
    repository: Arc<dyn UserRepository>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(repository)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

fn assert_error(body: &Value, code: &str, message: &str) {
    assert_eq!(body.get("code").and_then(Value::as_str), Some(code));
    assert_eq!(body.get("message").and_then(Value::as_str), Some(message));
}

#[rstest]
#[actix_web::test]
async fn create_returns_record_with_generated_id(repository: Arc<InMemoryUserRepository>) {
    let (status, body) = send(
        repository.clone(),
        actix_test::TestRequest::post()
            .uri(&uri("/users"))
            .set_json(json!({"name": "Ada", "email": "ada@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Ada", "email": "ada@x.com"}));
    assert_eq!(repository.rows().len(), 1);
}

#[rstest]
#[actix_web::test]
async fn create_ignores_client_supplied_id(repository: Arc<InMemoryUserRepository>) {
    let (status, body) = send(
        repository,
        actix_test::TestRequest::post()
            .uri(&uri("/users"))
            .set_json(json!({"id": 99, "name": "Ada", "email": "ada@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("id"), Some(&json!(1)));
}

#[rstest]
#[case::not_json("{not json")]
#[case::array("[1, 2]")]
#[case::missing_email(r#"{"name":"Ada"}"#)]
#[case::wrong_type(r#"{"name":1,"email":"ada@x.com"}"#)]
#[case::unknown_field(r#"{"name":"Ada","email":"ada@x.com","role":"admin"}"#)]
#[case::empty("")]
#[actix_web::test]
async fn create_rejects_undecodable_bodies(
    repository: Arc<InMemoryUserRepository>,
    #[case] payload: &'static str,
) {
    let (status, body) = send(
        repository.clone(),
        actix_test::TestRequest::post()
            .uri(&uri("/users"))
            .insert_header(("content-type", "application/json"))
            .set_payload(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "invalid_request", "Invalid input");
    assert!(repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn create_accepts_bodies_without_content_type(repository: Arc<InMemoryUserRepository>) {
    let (status, _) = send(
        repository.clone(),
        actix_test::TestRequest::post()
            .uri(&uri("/users"))
            .set_payload(r#"{"name":"Ada","email":"ada@x.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(repository.rows().len(), 1);
}

#[rstest]
#[actix_web::test]
async fn get_returns_stored_user(repository: Arc<InMemoryUserRepository>) {
    let created = repository
        .insert(&UserDraft::new("Ada", "ada@x.com"))
        .await
        .expect("seed");

    let (status, body) = send(
        repository,
        actix_test::TestRequest::get().uri(&uri(&format!("/users/{}", created.id()))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(&created).expect("serialise"));
}

#[rstest]
#[case::absent("/users/7")]
#[case::malformed("/users/abc")]
#[case::overflow("/users/99999999999")]
#[actix_web::test]
async fn get_unknown_or_malformed_id_is_not_found(
    repository: Arc<InMemoryUserRepository>,
    #[case] path: &str,
) {
    let (status, body) = send(repository, actix_test::TestRequest::get().uri(&uri(path))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found", "User not found");
}

#[rstest]
#[actix_web::test]
async fn list_on_empty_storage_is_empty_array(repository: Arc<InMemoryUserRepository>) {
    let (status, body) = send(repository, actix_test::TestRequest::get().uri(&uri("/users"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn update_replaces_fields_but_not_id(repository: Arc<InMemoryUserRepository>) {
    let created = repository
        .insert(&UserDraft::new("Ada", "ada@x.com"))
        .await
        .expect("seed");

    let (status, body) = send(
        repository,
        actix_test::TestRequest::put()
            .uri(&uri(&format!("/users/{}", created.id())))
            .set_json(json!({"id": 500, "name": "Grace", "email": "grace@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": created.id().as_i32(), "name": "Grace", "email": "grace@x.com"})
    );
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_user_is_not_found(repository: Arc<InMemoryUserRepository>) {
    let (status, body) = send(
        repository,
        actix_test::TestRequest::put()
            .uri(&uri("/users/3"))
            .set_json(json!({"name": "Grace", "email": "grace@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found", "User not found after update");
}

#[rstest]
#[actix_web::test]
async fn update_decodes_body_before_path(repository: Arc<InMemoryUserRepository>) {
    let (status, _) = send(
        repository,
        actix_test::TestRequest::put()
            .uri(&uri("/users/abc"))
            .insert_header(("content-type", "application/json"))
            .set_payload("{"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn update_with_malformed_path_id_is_not_found(repository: Arc<InMemoryUserRepository>) {
    let (status, body) = send(
        repository,
        actix_test::TestRequest::put()
            .uri(&uri("/users/abc"))
            .set_json(json!({"name": "Grace", "email": "grace@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found", "User not found");
}

#[rstest]
#[actix_web::test]
async fn delete_removes_user(repository: Arc<InMemoryUserRepository>) {
    let created = repository
        .insert(&UserDraft::new("Ada", "ada@x.com"))
        .await
        .expect("seed");

    let (status, body) = send(
        repository.clone(),
        actix_test::TestRequest::delete().uri(&uri(&format!("/users/{}", created.id()))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User deleted"}));
    assert!(repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn delete_of_missing_user_is_not_found(repository: Arc<InMemoryUserRepository>) {
    let (status, body) =
        send(repository, actix_test::TestRequest::delete().uri(&uri("/users/1"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found", "User not found");
}

#[rstest]
#[actix_web::test]
async fn list_storage_failure_is_redacted_internal_error() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(UserPersistenceError::query("relation does not exist")));

    let (status, body) = send(Arc::new(repo), actix_test::TestRequest::get().uri(&uri("/users"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error(&body, "internal_error", "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn delete_statement_failure_is_internal_error() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .return_once(|id| Ok(Some(User::new(id, UserDraft::new("Ada", "ada@x.com")))));
    repo.expect_delete()
        .withf(|id| *id == UserId::new(4))
        .times(1)
        .return_once(|_| Err(UserPersistenceError::connection("connection reset")));

    let (status, body) =
        send(Arc::new(repo), actix_test::TestRequest::delete().uri(&uri("/users/4"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.get("code"), Some(&json!(ErrorCode::InternalError)));
}

#[rstest]
#[actix_web::test]
async fn malformed_id_never_reaches_storage() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().never();
    repo.expect_delete().never();

    let (status, _) =
        send(Arc::new(repo), actix_test::TestRequest::delete().uri(&uri("/users/x1"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
