use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use garde::Validate;
use serde::Deserialize;

use crate::adapters::inbound::http::http_error::{HttpError, respond};
use crate::adapters::inbound::http::validation::{not_blank, validated};
use crate::core::user::{NewUser, UserId, UserPatch};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct UserBody {
    #[garde(required, custom(not_blank))]
    pub name: Option<String>,
    #[garde(required, custom(not_blank), email)]
    pub email: Option<String>,
}

impl From<UserBody> for NewUser {
    fn from(body: UserBody) -> Self {
        NewUser {
            name: body.name.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
        }
    }
}

/// Partial update; a supplied email must still be well formed.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPatchBody {
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
}

impl From<UserPatchBody> for UserPatch {
    fn from(body: UserPatchBody) -> Self {
        UserPatch {
            name: body.name,
            email: body.email,
        }
    }
}

fn json_rejected(rejection: JsonRejection) -> Response {
    HttpError::unprocessable(rejection.body_text()).into_response()
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejected(rejection),
    };
    match validated(body) {
        Ok(body) => respond(state.user_command_handler.create(body.into()).await),
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Result<Json<UserPatchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejected(rejection),
    };
    match validated(body) {
        Ok(body) => respond(state.user_command_handler.update(user_id, body.into()).await),
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn get(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Response {
    respond(state.user_queries.get(user_id).await)
}

pub async fn list(State(state): State<AppState>) -> Response {
    respond(state.user_queries.list().await)
}

pub async fn delete(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Response {
    match state.user_command_handler.delete(user_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}
