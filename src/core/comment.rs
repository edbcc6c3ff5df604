use chrono::NaiveDateTime;

use crate::core::item::ItemId;
use crate::core::user::UserId;

pub type CommentId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub created: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub item_id: ItemId,
    pub author_id: UserId,
    pub created: NaiveDateTime,
}
