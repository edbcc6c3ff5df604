use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use garde::Validate;
use serde::Deserialize;

use crate::adapters::inbound::http::caller::SharerUserId;
use crate::adapters::inbound::http::http_error::{HttpError, respond};
use crate::adapters::inbound::http::validation::{not_blank, validated};
use crate::core::pagination::PageRequest;
use crate::core::request::RequestId;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RequestBody {
    #[garde(required, custom(not_blank))]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

pub async fn create(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return HttpError::unprocessable(rejection.body_text()).into_response(),
    };
    let description = match validated(body) {
        Ok(body) => body.description.unwrap_or_default(),
        Err(err) => return HttpError::from(err).into_response(),
    };
    respond(state.create_request_handler.handle(caller, description).await)
}

pub async fn list_own(State(state): State<AppState>, SharerUserId(caller): SharerUserId) -> Response {
    respond(state.request_queries.own(caller).await)
}

pub async fn list_others(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return HttpError::bad_request(rejection.body_text()).into_response(),
    };
    match PageRequest::new(params.from.unwrap_or(0), params.size.unwrap_or(10)) {
        Ok(page) => respond(state.request_queries.others(caller, page).await),
        Err(err) => HttpError::bad_request(err.to_string()).into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    Path(request_id): Path<RequestId>,
) -> Response {
    respond(state.request_queries.get(caller, request_id).await)
}
