use axum::{extract::FromRequestParts, http::request::Parts};

use crate::adapters::inbound::http::http_error::HttpError;
use crate::core::user::UserId;

pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Id of the calling user, taken as-is from the `X-Sharer-User-Id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub UserId);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_ID)
            .ok_or_else(|| HttpError::bad_request(format!("missing header {SHARER_USER_ID}")))?;
        value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<UserId>().ok())
            .map(SharerUserId)
            .ok_or_else(|| HttpError::bad_request(format!("header {SHARER_USER_ID} must be a number")))
    }
}
