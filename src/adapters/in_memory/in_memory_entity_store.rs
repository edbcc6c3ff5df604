// In memory entity store.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Keep one table per entity, each behind its own lock, with ids assigned per
//   store instance starting at 1.
// - Enforce the unique email constraint on users.
// - Evaluate booking and request queries the way a SQL backend would: filter,
//   order, then cut the requested page.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::booking::filter::BookingFilter;
use crate::core::booking::{Booking, BookingId, NewBooking, sort_by_start_desc};
use crate::core::comment::{Comment, NewComment};
use crate::core::item::{Item, ItemId, NewItem};
use crate::core::pagination::PageRequest;
use crate::core::ports::{
    BookingStore, CommentStore, ItemStore, RequestStore, StoreError, UserStore,
};
use crate::core::request::{ItemRequest, NewItemRequest, RequestId};
use crate::core::user::{NewUser, User, UserId};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn replace(&mut self, table: &'static str, id: i64, row: T) -> Result<T, StoreError> {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(row)
            }
            None => Err(StoreError::MissingRow { table, id }),
        }
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }
}

#[derive(Default)]
pub struct InMemoryEntityStore {
    users: RwLock<Table<User>>,
    items: RwLock<Table<Item>>,
    bookings: RwLock<Table<Booking>>,
    comments: RwLock<Table<Comment>>,
    requests: RwLock<Table<ItemRequest>>,
    is_offline: bool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(())
    }
}

fn newest_first(requests: &mut [ItemRequest]) {
    requests.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl UserStore for InMemoryEntityStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.ensure_online()?;
        Ok(self.users.read().await.select(|_| true))
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.ensure_online()?;
        let mut users = self.users.write().await;
        if users.rows.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation(format!(
                "email {} is already registered",
                user.email
            )));
        }
        Ok(users.insert_with(|id| User {
            id,
            name: user.name,
            email: user.email,
        }))
    }

    async fn update_user(&self, user: User) -> Result<User, StoreError> {
        self.ensure_online()?;
        let mut users = self.users.write().await;
        if users
            .rows
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::UniqueViolation(format!(
                "email {} is already registered",
                user.email
            )));
        }
        users.replace("users", user.id, user.clone())
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let items = self.items.read().await;
        let bookings = self.bookings.read().await;
        let comments = self.comments.read().await;
        let requests = self.requests.read().await;
        let referenced_by = if items.rows.values().any(|i| i.owner_id == id) {
            Some("items")
        } else if bookings.rows.values().any(|b| b.booker_id == id) {
            Some("bookings")
        } else if comments.rows.values().any(|c| c.author_id == id) {
            Some("comments")
        } else if requests.rows.values().any(|r| r.requester_id == id) {
            Some("requests")
        } else {
            None
        };
        if let Some(table) = referenced_by {
            return Err(StoreError::StillReferenced(format!(
                "user {id} is still referenced by {table}"
            )));
        }
        Ok(self.users.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl ItemStore for InMemoryEntityStore {
    async fn find_item(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.ensure_online()?;
        Ok(self.items.read().await.get(id))
    }

    async fn insert_item(&self, item: NewItem) -> Result<Item, StoreError> {
        self.ensure_online()?;
        Ok(self.items.write().await.insert_with(|id| Item {
            id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        }))
    }

    async fn update_item(&self, item: Item) -> Result<Item, StoreError> {
        self.ensure_online()?;
        self.items.write().await.replace("items", item.id, item.clone())
    }

    async fn find_items_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>, StoreError> {
        self.ensure_online()?;
        Ok(self.items.read().await.select(|i| i.owner_id == owner_id))
    }

    async fn search_available_items(&self, text: &str) -> Result<Vec<Item>, StoreError> {
        self.ensure_online()?;
        Ok(self.items.read().await.select(|i| i.matches_search(text)))
    }

    async fn find_items_by_requests(
        &self,
        request_ids: &[RequestId],
    ) -> Result<Vec<Item>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .items
            .read()
            .await
            .select(|i| i.request_id.is_some_and(|r| request_ids.contains(&r))))
    }
}

#[async_trait]
impl BookingStore for InMemoryEntityStore {
    async fn find_booking(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        self.ensure_online()?;
        Ok(self.bookings.read().await.get(id))
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        self.ensure_online()?;
        Ok(self.bookings.write().await.insert_with(|id| Booking {
            id,
            start: booking.start,
            end: booking.end,
            item_id: booking.item_id,
            booker_id: booking.booker_id,
            status: booking.status,
        }))
    }

    async fn update_booking(&self, booking: Booking) -> Result<Booking, StoreError> {
        self.ensure_online()?;
        self.bookings
            .write()
            .await
            .replace("bookings", booking.id, booking.clone())
    }

    async fn find_bookings_by_booker(
        &self,
        booker_id: UserId,
        filter: BookingFilter,
        page: PageRequest,
    ) -> Result<Vec<Booking>, StoreError> {
        self.ensure_online()?;
        let mut bookings = self
            .bookings
            .read()
            .await
            .select(|b| b.booker_id == booker_id && filter.matches(b));
        sort_by_start_desc(&mut bookings);
        Ok(page.page(bookings))
    }

    async fn find_bookings_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Booking>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .bookings
            .read()
            .await
            .select(|b| item_ids.contains(&b.item_id)))
    }

    async fn find_bookings_by_item_and_booker(
        &self,
        item_id: ItemId,
        booker_id: UserId,
    ) -> Result<Vec<Booking>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .bookings
            .read()
            .await
            .select(|b| b.item_id == item_id && b.booker_id == booker_id))
    }
}

#[async_trait]
impl CommentStore for InMemoryEntityStore {
    async fn insert_comment(&self, comment: NewComment) -> Result<Comment, StoreError> {
        self.ensure_online()?;
        Ok(self.comments.write().await.insert_with(|id| Comment {
            id,
            text: comment.text,
            item_id: comment.item_id,
            author_id: comment.author_id,
            created: comment.created,
        }))
    }

    async fn find_comments_by_items(
        &self,
        item_ids: &[ItemId],
    ) -> Result<Vec<Comment>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .comments
            .read()
            .await
            .select(|c| item_ids.contains(&c.item_id)))
    }
}

#[async_trait]
impl RequestStore for InMemoryEntityStore {
    async fn find_request(&self, id: RequestId) -> Result<Option<ItemRequest>, StoreError> {
        self.ensure_online()?;
        Ok(self.requests.read().await.get(id))
    }

    async fn insert_request(&self, request: NewItemRequest) -> Result<ItemRequest, StoreError> {
        self.ensure_online()?;
        Ok(self.requests.write().await.insert_with(|id| ItemRequest {
            id,
            description: request.description,
            requester_id: request.requester_id,
            created: request.created,
        }))
    }

    async fn find_requests_by_requester(
        &self,
        requester_id: UserId,
    ) -> Result<Vec<ItemRequest>, StoreError> {
        self.ensure_online()?;
        let mut requests = self
            .requests
            .read()
            .await
            .select(|r| r.requester_id == requester_id);
        newest_first(&mut requests);
        Ok(requests)
    }

    async fn find_requests_excluding(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Vec<ItemRequest>, StoreError> {
        self.ensure_online()?;
        let mut requests = self
            .requests
            .read()
            .await
            .select(|r| r.requester_id != user_id);
        newest_first(&mut requests);
        Ok(page.page(requests))
    }
}
