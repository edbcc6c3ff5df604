// Named buckets that list endpoints accept in their `state` parameter.
//
// The incoming string is parsed once into `Bucket` at the edge; everything past the
// edge matches on the enum.

use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::booking::filter::BookingFilter;
use crate::core::booking::status::BookingStatus;
use crate::core::booking::{Booking, sort_by_start_desc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bucket {
    #[default]
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown state: {0}")]
pub struct UnknownBucket(pub String);

impl Bucket {
    pub const ALL: [Bucket; 6] = [
        Bucket::All,
        Bucket::Current,
        Bucket::Past,
        Bucket::Future,
        Bucket::Waiting,
        Bucket::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::All => "ALL",
            Bucket::Current => "CURRENT",
            Bucket::Past => "PAST",
            Bucket::Future => "FUTURE",
            Bucket::Waiting => "WAITING",
            Bucket::Rejected => "REJECTED",
        }
    }

    /// The store-level query shape for this bucket at `now`.
    pub fn filter(self, now: NaiveDateTime) -> BookingFilter {
        match self {
            Bucket::All => BookingFilter::All,
            Bucket::Current => BookingFilter::ActiveAt(now),
            Bucket::Past => BookingFilter::EndsBefore(now),
            Bucket::Future => BookingFilter::StartsAfter(now),
            Bucket::Waiting => BookingFilter::Status(BookingStatus::Waiting),
            Bucket::Rejected => BookingFilter::Status(BookingStatus::Rejected),
        }
    }

    pub fn matches(self, booking: &Booking, now: NaiveDateTime) -> bool {
        self.filter(now).matches(booking)
    }
}

impl FromStr for Bucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keeps the bookings that fall in `bucket`, newest start first.
pub fn classify(mut bookings: Vec<Booking>, bucket: Bucket, now: NaiveDateTime) -> Vec<Booking> {
    sort_by_start_desc(&mut bookings);
    bookings.retain(|booking| bucket.matches(booking, now));
    bookings
}

#[cfg(test)]
mod bucket_tests {
    use super::*;
    use crate::test_support::fixtures::bookings::{BookingBuilder, noon};
    use rstest::{fixture, rstest};

    #[fixture]
    fn bookings() -> Vec<Booking> {
        vec![
            BookingBuilder::new()
                .id(1)
                .window_hours(-2, -1)
                .status(BookingStatus::Approved)
                .build(),
            BookingBuilder::new()
                .id(2)
                .window_hours(-1, 1)
                .status(BookingStatus::Approved)
                .build(),
            BookingBuilder::new().id(3).window_hours(1, 2).build(),
            BookingBuilder::new()
                .id(4)
                .window_hours(3, 4)
                .status(BookingStatus::Rejected)
                .build(),
            BookingBuilder::new()
                .id(5)
                .window_hours(-5, -3)
                .status(BookingStatus::Canceled)
                .build(),
            BookingBuilder::new().id(6).window_hours(0, 1).build(),
        ]
    }

    fn ids(bookings: &[Booking]) -> Vec<i64> {
        bookings.iter().map(|b| b.id).collect()
    }

    #[rstest]
    #[case(Bucket::All, vec![4, 3, 6, 2, 1, 5])]
    #[case(Bucket::Future, vec![4, 3])]
    #[case(Bucket::Current, vec![2])]
    #[case(Bucket::Past, vec![1, 5])]
    #[case(Bucket::Waiting, vec![3, 6])]
    #[case(Bucket::Rejected, vec![4])]
    fn it_should_classify_each_bucket(
        bookings: Vec<Booking>,
        #[case] bucket: Bucket,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ids(&classify(bookings, bucket, noon())), expected);
    }

    #[rstest]
    fn it_should_return_an_ordered_subset_for_every_bucket(bookings: Vec<Booking>) {
        for bucket in Bucket::ALL {
            let classified = classify(bookings.clone(), bucket, noon());
            assert!(classified.iter().all(|b| bookings.contains(b)));
            assert!(classified.windows(2).all(|w| w[0].start >= w[1].start));
            assert_eq!(classify(classified.clone(), Bucket::All, noon()), classified);
        }
    }

    #[rstest]
    fn it_should_place_a_finished_approved_booking_in_past_only() {
        let booking = BookingBuilder::new()
            .window_hours(-2, -1)
            .status(BookingStatus::Approved)
            .build();
        assert!(Bucket::Past.matches(&booking, noon()));
        assert!(!Bucket::Future.matches(&booking, noon()));
        assert!(!Bucket::Current.matches(&booking, noon()));
    }

    #[rstest]
    fn it_should_exclude_bookings_touching_now_from_current() {
        let starts_now = BookingBuilder::new().window_hours(0, 1).build();
        let ends_now = BookingBuilder::new().window_hours(-1, 0).build();
        assert!(!Bucket::Current.matches(&starts_now, noon()));
        assert!(!Bucket::Current.matches(&ends_now, noon()));
        assert!(!Bucket::Past.matches(&ends_now, noon()));
        assert!(!Bucket::Future.matches(&starts_now, noon()));
    }

    #[rstest]
    #[case("ALL", Bucket::All)]
    #[case("CURRENT", Bucket::Current)]
    #[case("PAST", Bucket::Past)]
    #[case("FUTURE", Bucket::Future)]
    #[case("WAITING", Bucket::Waiting)]
    #[case("REJECTED", Bucket::Rejected)]
    fn it_should_parse_known_names(#[case] name: &str, #[case] bucket: Bucket) {
        assert_eq!(name.parse::<Bucket>(), Ok(bucket));
        assert_eq!(bucket.to_string(), name);
    }

    #[rstest]
    #[case("UNSUPPORTED_STATUS")]
    #[case("all")]
    #[case("")]
    fn it_should_reject_unknown_names(#[case] name: &str) {
        let err = name.parse::<Bucket>().unwrap_err();
        assert_eq!(err.to_string(), format!("Unknown state: {name}"));
    }
}
