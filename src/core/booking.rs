// Booking domain components.
//
// Structure
// - status.rs: the four booking statuses
// - filter.rs: store-level query shapes over bookings
// - bucket.rs: the six named buckets and the classifier built on them
// - summary.rs: last/next booking of a single item and comment eligibility
// - decider/: pure decisions for creating and approving bookings

pub mod bucket;
pub mod filter;
pub mod status;
pub mod summary;
pub mod decider {
    pub mod approve;
    pub mod create;
}

use chrono::NaiveDateTime;

use crate::core::item::ItemId;
use crate::core::user::UserId;
use status::BookingStatus;

pub type BookingId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item_id: ItemId,
    pub booker_id: UserId,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn waiting(
        item_id: ItemId,
        booker_id: UserId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            start,
            end,
            item_id,
            booker_id,
            status: BookingStatus::Waiting,
        }
    }
}

impl Booking {
    pub fn starts_after(&self, now: NaiveDateTime) -> bool {
        self.start > now
    }

    pub fn ended_before(&self, now: NaiveDateTime) -> bool {
        self.end < now
    }

    /// Strict on both sides: a booking starting or ending exactly at `now` is not active.
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.start < now && self.end > now
    }
}

/// Newest start first. Stable, so equal starts keep store order.
pub fn sort_by_start_desc(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.start.cmp(&a.start));
}
