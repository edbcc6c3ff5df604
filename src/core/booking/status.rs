use serde::{Deserialize, Serialize};

/// CANCELED is never assigned by this service; it only shows up in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    /// True for a rental the owner accepted and nobody withdrew.
    pub fn is_accepted(self) -> bool {
        !matches!(
            self,
            BookingStatus::Waiting | BookingStatus::Rejected | BookingStatus::Canceled
        )
    }
}
