// Single place where application errors become HTTP responses.
//
// Body shapes
// - not found:       404 {"errors":{"errorMessage":msg}}
// - bad request:     400 {"error":msg}
// - validation:      400 {"errors":{field:msg,...}}
// - conflict:        409 {"error":msg}
// - anything else:   500 {"errors":{"errorMessage":msg}}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::application::errors::{ApplicationError, FieldErrors};

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: Value,
}

impl HttpError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "errors": { "errorMessage": message.into() } }),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "errors": errors }),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "errors": { "errorMessage": message.into() } }),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        let response = match err {
            ApplicationError::NotFound(_) => HttpError::not_found(message),
            ApplicationError::BadRequest(_) => HttpError::bad_request(message),
            ApplicationError::Validation(errors) => HttpError::validation(errors),
            ApplicationError::Conflict(_) => HttpError::conflict(message),
            ApplicationError::AccessDenied(denied) if denied.reported_as_not_found() => {
                HttpError::not_found(message)
            }
            ApplicationError::AccessDenied(_) => HttpError::bad_request(message),
            ApplicationError::Store(_) => HttpError::internal(message),
        };
        if response.status.is_server_error() {
            error!(status = %response.status, error = %response.body, "request failed");
        } else {
            warn!(status = %response.status, error = %response.body, "request rejected");
        }
        response
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// 200 with the JSON view, or the mapped error.
pub fn respond<T: Serialize>(result: Result<T, ApplicationError>) -> Response {
    match result {
        Ok(view) => Json(view).into_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}
