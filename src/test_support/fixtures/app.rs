// Router wired against a seeded store, plus request helpers for oneshot tests.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::adapters::inbound::http::caller::SHARER_USER_ID;
use crate::application::query_handlers::booking_queries::OwnerPagination;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::test_support::fixtures::store::Seeded;

pub fn app(seeded: &Seeded) -> Router {
    app_with(seeded, OwnerPagination::default())
}

pub fn app_with(seeded: &Seeded, owner_pagination: OwnerPagination) -> Router {
    router(AppState::new(
        seeded.store.clone(),
        seeded.clock.clone(),
        owner_pagination,
    ))
}

pub fn request(method: Method, uri: &str, caller: Option<i64>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = caller {
        builder = builder.header(SHARER_USER_ID, id.to_string());
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request and decodes the body; an empty body decodes to `Value::Null`.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}
