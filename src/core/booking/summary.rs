// Last/next booking of a single item, as shown to its owner.
//
// Only accepted bookings count. A rental in progress is reported as the "last"
// booking, taking precedence over one that has already ended.

use chrono::NaiveDateTime;

use crate::core::booking::Booking;
use crate::core::user::UserId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSummary {
    pub last: Option<Booking>,
    pub next: Option<Booking>,
}

pub fn summarize(bookings: &[Booking], now: NaiveDateTime) -> BookingSummary {
    let accepted = || bookings.iter().filter(|b| b.status.is_accepted());

    let ended = accepted()
        .filter(|b| b.ended_before(now))
        .max_by_key(|b| b.end);
    let ongoing = accepted()
        .filter(|b| b.is_active_at(now))
        .max_by_key(|b| b.end);
    let next = accepted()
        .filter(|b| b.starts_after(now))
        .min_by_key(|b| b.start);

    BookingSummary {
        last: ongoing.or(ended).cloned(),
        next: next.cloned(),
    }
}

/// True once `booker_id` holds an accepted booking among `bookings` that has ended.
pub fn has_completed_rental(bookings: &[Booking], booker_id: UserId, now: NaiveDateTime) -> bool {
    bookings
        .iter()
        .any(|b| b.booker_id == booker_id && b.status.is_accepted() && b.ended_before(now))
}
