// Query shapes a store evaluates when it lists bookings for a booker.
//
// Each shape carries the instant it was built with, so the store never reads a
// clock of its own.

use chrono::NaiveDateTime;

use crate::core::booking::Booking;
use crate::core::booking::status::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFilter {
    All,
    StartsAfter(NaiveDateTime),
    EndsBefore(NaiveDateTime),
    ActiveAt(NaiveDateTime),
    Status(BookingStatus),
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        match *self {
            BookingFilter::All => true,
            BookingFilter::StartsAfter(now) => booking.starts_after(now),
            BookingFilter::EndsBefore(now) => booking.ended_before(now),
            BookingFilter::ActiveAt(now) => booking.is_active_at(now),
            BookingFilter::Status(status) => booking.status == status,
        }
    }
}
