//! HTTP helpers for the users behavioural suite.

use actix_web::http::Method;
use actix_web::http::header::CONTENT_TYPE;
use awc::Client;
use serde_json::Value;

use crate::harness::{SharedWorld, with_world_async};

/// Body attached to a request.
pub(crate) enum Payload {
    Empty,
    Json(Value),
    Raw(&'static str),
}

pub(crate) struct Request<'a> {
    pub(crate) method: Method,
    pub(crate) path: &'a str,
    pub(crate) payload: Payload,
}

/// Send `request` to the running server and record status, headers and body.
///
/// Empty bodies are recorded as `None`.
pub(crate) fn perform_request(world: &SharedWorld, request: Request<'_>) {
    let Request {
        method,
        path,
        payload,
    } = request;
    let url_path = path.to_owned();
    let (status, headers, body) = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{url_path}"));
        let mut response = match payload {
            Payload::Empty => request.send().await.expect("request"),
            Payload::Json(value) => request.send_json(&value).await.expect("json request"),
            Payload::Raw(raw) => request
                .insert_header((CONTENT_TYPE, "application/json"))
                .send_body(raw)
                .await
                .expect("raw request"),
        };
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.body().await.expect("body");
        let body = (!bytes.is_empty())
            .then(|| serde_json::from_slice::<Value>(&bytes).expect("json body"));
        (status, headers, body)
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_headers = Some(headers);
    ctx.last_body = body;
}

/// Header value from the last recorded response.
pub(crate) fn last_header(world: &SharedWorld, name: &str) -> Option<String> {
    world
        .borrow()
        .last_headers
        .as_ref()
        .and_then(|headers| headers.get(name))
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
