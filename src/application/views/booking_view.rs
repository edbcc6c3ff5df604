// Wire shape of a booking, with its booker and item inlined.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::views::user_view::UserView;
use crate::core::booking::status::BookingStatus;
use crate::core::booking::{Booking, BookingId};
use crate::core::item::{Item, ItemId};
use crate::core::user::{User, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    pub id: BookingId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub booker: UserView,
    pub item: BookedItemView,
}

impl BookingView {
    pub fn new(booking: Booking, booker: User, item: Item) -> Self {
        Self {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            status: booking.status,
            booker: booker.into(),
            item: BookedItemView {
                id: item.id,
                name: item.name,
                description: item.description,
                available: item.available,
            },
        }
    }
}

/// The `{id, bookerId}` pair shown as an item's last or next booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRefView {
    pub id: BookingId,
    pub booker_id: UserId,
}

impl From<&Booking> for BookingRefView {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            booker_id: booking.booker_id,
        }
    }
}
