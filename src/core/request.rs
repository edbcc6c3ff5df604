// An item request: a user asking for something nobody has listed yet.
// Items created in answer carry the request id.

use chrono::NaiveDateTime;

use crate::core::user::UserId;

pub type RequestId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub id: RequestId,
    pub description: String,
    pub requester_id: UserId,
    pub created: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemRequest {
    pub description: String,
    pub requester_id: UserId,
    pub created: NaiveDateTime,
}
