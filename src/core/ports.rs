// Ports define what the core needs from storage, without implementing it.
//
// Purpose
// - Describe lookup-by-id, insert with store-assigned ids, update, and the filtered
//   queries the booking engine relies on, one trait per table.
//
// Responsibilities
// - Keep handlers independent of any database by coding against these traits.
// - Queries that page do so inside the store; everything else returns full lists.
//
// Boundaries
// - No concrete input or output here. `adapters::in_memory` implements every trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::booking::filter::BookingFilter;
use crate::core::booking::{Booking, BookingId, NewBooking};
use crate::core::comment::{Comment, NewComment};
use crate::core::item::{Item, ItemId, NewItem};
use crate::core::pagination::PageRequest;
use crate::core::request::{ItemRequest, NewItemRequest, RequestId};
use crate::core::user::{NewUser, User, UserId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("{0}")]
    StillReferenced(String),

    #[error("row {table}#{id} does not exist")]
    MissingRow { table: &'static str, id: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError>;
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    /// Fails with `UniqueViolation` when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn update_user(&self, user: User) -> Result<User, StoreError>;
    /// Fails with `StillReferenced` while the user owns items or appears on bookings,
    /// comments or requests.
    async fn delete_user(&self, id: UserId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find_item(&self, id: ItemId) -> Result<Option<Item>, StoreError>;
    async fn insert_item(&self, item: NewItem) -> Result<Item, StoreError>;
    async fn update_item(&self, item: Item) -> Result<Item, StoreError>;
    /// Ordered by id.
    async fn find_items_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>, StoreError>;
    async fn search_available_items(&self, text: &str) -> Result<Vec<Item>, StoreError>;
    async fn find_items_by_requests(
        &self,
        request_ids: &[RequestId],
    ) -> Result<Vec<Item>, StoreError>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn find_booking(&self, id: BookingId) -> Result<Option<Booking>, StoreError>;
    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, StoreError>;
    async fn update_booking(&self, booking: Booking) -> Result<Booking, StoreError>;
    /// Bookings of `booker_id` matching `filter`, newest start first, cut to the page
    /// numbered `page.page_number()`.
    async fn find_bookings_by_booker(
        &self,
        booker_id: UserId,
        filter: BookingFilter,
        page: PageRequest,
    ) -> Result<Vec<Booking>, StoreError>;
    /// Unsorted; callers order the result themselves.
    async fn find_bookings_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Booking>, StoreError>;
    async fn find_bookings_by_item_and_booker(
        &self,
        item_id: ItemId,
        booker_id: UserId,
    ) -> Result<Vec<Booking>, StoreError>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert_comment(&self, comment: NewComment) -> Result<Comment, StoreError>;
    /// Ordered by id.
    async fn find_comments_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Comment>, StoreError>;
}

#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn find_request(&self, id: RequestId) -> Result<Option<ItemRequest>, StoreError>;
    async fn insert_request(&self, request: NewItemRequest) -> Result<ItemRequest, StoreError>;
    /// Newest first.
    async fn find_requests_by_requester(
        &self,
        requester_id: UserId,
    ) -> Result<Vec<ItemRequest>, StoreError>;
    /// Requests of everyone but `user_id`, newest first, cut to the page numbered
    /// `page.page_number()`.
    async fn find_requests_excluding(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Vec<ItemRequest>, StoreError>;
}

/// Every table the service reads or writes.
pub trait EntityStore: UserStore + ItemStore + BookingStore + CommentStore + RequestStore {}

impl<T> EntityStore for T where T: UserStore + ItemStore + BookingStore + CommentStore + RequestStore {}
