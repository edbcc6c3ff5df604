use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use garde::Validate;
use serde::Deserialize;

use crate::adapters::inbound::http::caller::SharerUserId;
use crate::adapters::inbound::http::http_error::{HttpError, respond};
use crate::adapters::inbound::http::validation::{not_blank, validated};
use crate::application::command_handlers::item_command_handler::AddItem;
use crate::core::item::{ItemId, ItemPatch};
use crate::core::request::RequestId;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    #[garde(required, custom(not_blank))]
    pub name: Option<String>,
    #[garde(required, custom(not_blank))]
    pub description: Option<String>,
    #[garde(required)]
    pub available: Option<bool>,
    #[garde(skip)]
    pub request_id: Option<RequestId>,
}

impl From<ItemBody> for AddItem {
    fn from(body: ItemBody) -> Self {
        AddItem {
            name: body.name.unwrap_or_default(),
            description: body.description.unwrap_or_default(),
            available: body.available.unwrap_or_default(),
            request_id: body.request_id,
        }
    }
}

/// Every field optional; only the supplied ones change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatchBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl From<ItemPatchBody> for ItemPatch {
    fn from(body: ItemPatchBody) -> Self {
        ItemPatch {
            name: body.name,
            description: body.description,
            available: body.available,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CommentBody {
    #[garde(required, custom(not_blank))]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub text: String,
}

fn json_rejected(rejection: JsonRejection) -> Response {
    HttpError::unprocessable(rejection.body_text()).into_response()
}

pub async fn create(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    body: Result<Json<ItemBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejected(rejection),
    };
    match validated(body) {
        Ok(body) => respond(state.item_command_handler.add_item(caller, body.into()).await),
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    Path(item_id): Path<ItemId>,
    body: Result<Json<ItemPatchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejected(rejection),
    };
    respond(
        state
            .item_command_handler
            .update_item(caller, item_id, body.into())
            .await,
    )
}

pub async fn get(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    Path(item_id): Path<ItemId>,
) -> Response {
    respond(state.item_queries.get_item(caller, item_id).await)
}

pub async fn list_own(State(state): State<AppState>, SharerUserId(caller): SharerUserId) -> Response {
    respond(state.item_queries.list_owner_items(caller).await)
}

pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    respond(state.item_queries.search(&params.text).await)
}

pub async fn comment(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    Path(item_id): Path<ItemId>,
    body: Result<Json<CommentBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejected(rejection),
    };
    let text = match validated(body) {
        Ok(body) => body.text.unwrap_or_default(),
        Err(err) => return HttpError::from(err).into_response(),
    };
    respond(state.add_comment_handler.handle(caller, item_id, text).await)
}
