// Attaches last/next booking information to items and answers comment eligibility.
//
// Purpose
// - Keep every read of an item's bookings behind one type, so item queries and the
//   comment flow apply the same accepted-status and timing rules.
//
// Responsibilities
// - Only the owner of an item sees its summary; everyone else gets an empty one.
// - Take "now" from the caller so a whole listing is summarized against one instant.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::application::errors::ApplicationError;
use crate::core::booking::summary::{BookingSummary, has_completed_rental, summarize};
use crate::core::booking::Booking;
use crate::core::item::{Item, ItemId};
use crate::core::ports::EntityStore;
use crate::core::user::UserId;

pub struct BookingSummaryProjector<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> BookingSummaryProjector<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn project(
        &self,
        item: &Item,
        viewer_id: UserId,
        now: NaiveDateTime,
    ) -> Result<BookingSummary, ApplicationError> {
        if !item.is_owned_by(viewer_id) {
            return Ok(BookingSummary::default());
        }
        let bookings = self.store.find_bookings_by_items(&[item.id]).await?;
        Ok(summarize(&bookings, now))
    }

    /// Summaries for many items with a single booking query. Items the viewer does
    /// not own are absent from the map.
    pub async fn project_all(
        &self,
        items: &[Item],
        viewer_id: UserId,
        now: NaiveDateTime,
    ) -> Result<HashMap<ItemId, BookingSummary>, ApplicationError> {
        let owned: Vec<ItemId> = items
            .iter()
            .filter(|item| item.is_owned_by(viewer_id))
            .map(|item| item.id)
            .collect();
        if owned.is_empty() {
            return Ok(HashMap::new());
        }

        let mut by_item: HashMap<ItemId, Vec<Booking>> = HashMap::new();
        for booking in self.store.find_bookings_by_items(&owned).await? {
            by_item.entry(booking.item_id).or_default().push(booking);
        }
        Ok(owned
            .into_iter()
            .map(|id| {
                let bookings = by_item.remove(&id).unwrap_or_default();
                (id, summarize(&bookings, now))
            })
            .collect())
    }

    pub async fn comment_eligible(
        &self,
        item_id: ItemId,
        user_id: UserId,
        now: NaiveDateTime,
    ) -> Result<bool, ApplicationError> {
        let bookings = self
            .store
            .find_bookings_by_item_and_booker(item_id, user_id)
            .await?;
        Ok(has_completed_rental(&bookings, user_id, now))
    }
}
