// Pure decisions for a new booking request.
//
// `ensure_bookable` runs on the item alone, before the booker is looked up.
// `decide_create` runs once both are known and yields the WAITING booking to store.

use chrono::NaiveDateTime;

use crate::core::booking::NewBooking;
use crate::core::item::{Item, ItemId};
use crate::core::user::User;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CreateError {
    #[error("item not available for booking")]
    ItemUnavailable { item_id: ItemId },
    #[error("owner cannot book own item")]
    OwnerBooking,
}

pub fn ensure_bookable(item: &Item) -> Result<(), CreateError> {
    if item.available {
        Ok(())
    } else {
        Err(CreateError::ItemUnavailable { item_id: item.id })
    }
}

pub fn decide_create(
    item: &Item,
    booker: &User,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<NewBooking, CreateError> {
    let booking = NewBooking::waiting(item.id, booker.id, start, end);
    if item.is_owned_by(booker.id) {
        return Err(CreateError::OwnerBooking);
    }
    Ok(booking)
}
