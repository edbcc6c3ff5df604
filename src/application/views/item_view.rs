use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::views::booking_view::BookingRefView;
use crate::core::booking::summary::BookingSummary;
use crate::core::comment::{Comment, CommentId};
use crate::core::item::{Item, ItemId};
use crate::core::request::RequestId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub text: String,
    pub author_name: String,
    pub created: NaiveDateTime,
}

impl CommentView {
    pub fn new(comment: Comment, author_name: String) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            author_name,
            created: comment.created,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<RequestId>,
    pub last_booking: Option<BookingRefView>,
    pub next_booking: Option<BookingRefView>,
    pub comments: Vec<CommentView>,
}

impl ItemView {
    pub fn new(item: Item, summary: &BookingSummary, comments: Vec<CommentView>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
            last_booking: summary.last.as_ref().map(BookingRefView::from),
            next_booking: summary.next.as_ref().map(BookingRefView::from),
            comments,
        }
    }
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self::new(item, &BookingSummary::default(), Vec::new())
    }
}
