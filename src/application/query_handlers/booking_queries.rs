// Read side of bookings: a single booking, and bucketed lists for bookers and owners.
//
// Purpose
// - Apply the access rule on single reads and the two pagination styles on lists.
//
// Responsibilities
// - Capture "now" once per call and evaluate every bucket against it.
// - Booker lists page inside the store by page number.
// - Owner lists are built here from all bookings of the owner's items; the
//   configured `OwnerPagination` decides whether the bucket is applied before or
//   after the page is cut.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::application::errors::{AccessDenied, ApplicationError};
use crate::application::views::booking_view::BookingView;
use crate::core::booking::bucket::{Bucket, classify};
use crate::core::booking::{Booking, BookingId, sort_by_start_desc};
use crate::core::clock::Clock;
use crate::core::item::{Item, ItemId};
use crate::core::pagination::PageRequest;
use crate::core::ports::EntityStore;
use crate::core::user::{User, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerPagination {
    /// Apply the bucket, then cut `[from, from + size)`.
    #[default]
    FilterThenSlice,
    /// Cut `[from, from + size)` of all bookings, then apply the bucket. Pages may
    /// come back short or empty even when later bookings match.
    SliceThenFilter,
}

impl OwnerPagination {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            OwnerPagination::SliceThenFilter
        } else {
            OwnerPagination::FilterThenSlice
        }
    }

    fn apply(
        self,
        mut bookings: Vec<Booking>,
        bucket: Bucket,
        page: PageRequest,
        now: NaiveDateTime,
    ) -> Vec<Booking> {
        match self {
            OwnerPagination::FilterThenSlice => page.slice(classify(bookings, bucket, now)),
            OwnerPagination::SliceThenFilter => {
                sort_by_start_desc(&mut bookings);
                let mut window = page.slice(bookings);
                window.retain(|booking| bucket.matches(booking, now));
                window
            }
        }
    }
}

pub struct BookingQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    owner_pagination: OwnerPagination,
}

impl<TStore> BookingQueryHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>, owner_pagination: OwnerPagination) -> Self {
        Self {
            store,
            clock,
            owner_pagination,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(
        &self,
        requester_id: UserId,
        booking_id: BookingId,
    ) -> Result<BookingView, ApplicationError> {
        let booking = self
            .store
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| ApplicationError::booking_not_found(booking_id))?;
        let item = self.item(booking.item_id).await?;
        if booking.booker_id != requester_id && !item.is_owned_by(requester_id) {
            return Err(AccessDenied::NotParticipant {
                booking_id,
                user_id: requester_id,
            }
            .into());
        }
        let booker = self.user(booking.booker_id).await?;
        Ok(BookingView::new(booking, booker, item))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_for_booker(
        &self,
        booker_id: UserId,
        bucket: Bucket,
        page: PageRequest,
    ) -> Result<Vec<BookingView>, ApplicationError> {
        let booker = self.user(booker_id).await?;
        let now = self.clock.now();
        let bookings = self
            .store
            .find_bookings_by_booker(booker_id, bucket.filter(now), page)
            .await?;
        debug!(count = bookings.len(), "bookings listed for booker");

        let mut users = HashMap::from([(booker.id, booker)]);
        self.views(bookings, &mut users).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_for_owner(
        &self,
        owner_id: UserId,
        bucket: Bucket,
        page: PageRequest,
    ) -> Result<Vec<BookingView>, ApplicationError> {
        let owner = self.user(owner_id).await?;
        let now = self.clock.now();
        let items = self.store.find_items_by_owner(owner_id).await?;
        let item_ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        let bookings = self.store.find_bookings_by_items(&item_ids).await?;
        let bookings = self.owner_pagination.apply(bookings, bucket, page, now);
        debug!(count = bookings.len(), mode = ?self.owner_pagination, "bookings listed for owner");

        let mut users = HashMap::from([(owner.id, owner)]);
        self.views(bookings, &mut users).await
    }

    async fn views(
        &self,
        bookings: Vec<Booking>,
        users: &mut HashMap<UserId, User>,
    ) -> Result<Vec<BookingView>, ApplicationError> {
        let mut items: HashMap<ItemId, Item> = HashMap::new();
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            if !users.contains_key(&booking.booker_id) {
                let booker = self.user(booking.booker_id).await?;
                users.insert(booker.id, booker);
            }
            if !items.contains_key(&booking.item_id) {
                let item = self.item(booking.item_id).await?;
                items.insert(item.id, item);
            }
            let booker = users[&booking.booker_id].clone();
            let item = items[&booking.item_id].clone();
            views.push(BookingView::new(booking, booker, item));
        }
        Ok(views)
    }

    async fn user(&self, id: UserId) -> Result<User, ApplicationError> {
        self.store
            .find_user(id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(id))
    }

    async fn item(&self, id: ItemId) -> Result<Item, ApplicationError> {
        self.store
            .find_item(id)
            .await?
            .ok_or_else(|| ApplicationError::item_not_found(id))
    }
}
