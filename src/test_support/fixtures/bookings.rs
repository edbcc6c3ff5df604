// Booking fixtures anchored on a fixed instant so temporal tests never race the wall clock.

use crate::core::booking::Booking;
use crate::core::booking::status::BookingStatus;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// 2030-01-01T12:00:00, the "now" most tests evaluate against.
pub fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}

pub fn hours_from_noon(hours: i64) -> NaiveDateTime {
    noon() + Duration::hours(hours)
}

pub struct BookingBuilder {
    inner: Booking,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: Booking {
                id: 1,
                start: hours_from_noon(1),
                end: hours_from_noon(2),
                item_id: 1,
                booker_id: 2,
                status: BookingStatus::Waiting,
            },
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn window_hours(mut self, start: i64, end: i64) -> Self {
        self.inner.start = hours_from_noon(start);
        self.inner.end = hours_from_noon(end);
        self
    }

    pub fn item_id(mut self, v: i64) -> Self {
        self.inner.item_id = v;
        self
    }

    pub fn booker_id(mut self, v: i64) -> Self {
        self.inner.booker_id = v;
        self
    }

    pub fn status(mut self, v: BookingStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Booking {
        self.inner
    }
}

#[cfg(test)]
mod booking_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_waiting_booking_one_hour_ahead() {
        let booking = BookingBuilder::default().build();
        assert_eq!(booking.status, BookingStatus::Waiting);
        assert_eq!(booking.start, hours_from_noon(1));
        assert_eq!(booking.end, hours_from_noon(2));
    }

    #[rstest]
    fn it_should_override_every_field() {
        let booking = BookingBuilder::new()
            .id(9)
            .window_hours(-3, -1)
            .item_id(4)
            .booker_id(5)
            .status(BookingStatus::Rejected)
            .build();
        assert_eq!(
            booking,
            Booking {
                id: 9,
                start: hours_from_noon(-3),
                end: hours_from_noon(-1),
                item_id: 4,
                booker_id: 5,
                status: BookingStatus::Rejected,
            }
        );
    }
}
