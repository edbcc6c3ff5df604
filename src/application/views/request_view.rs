use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::item::{Item, ItemId};
use crate::core::request::{ItemRequest, RequestId};
use crate::core::user::UserId;

/// An item listed in answer to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweringItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: UserId,
    pub request_id: Option<RequestId>,
}

impl From<Item> for AnsweringItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestView {
    pub id: RequestId,
    pub description: String,
    pub created: NaiveDateTime,
    pub items: Vec<AnsweringItemView>,
}

impl RequestView {
    /// Keeps only the items that answer this request.
    pub fn new(request: ItemRequest, items: &[Item]) -> Self {
        Self {
            id: request.id,
            description: request.description,
            created: request.created,
            items: items
                .iter()
                .filter(|item| item.request_id == Some(request.id))
                .cloned()
                .map(AnsweringItemView::from)
                .collect(),
        }
    }
}
