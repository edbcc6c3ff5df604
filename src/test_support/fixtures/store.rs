// A store pre-filled with the cast most booking tests need:
// an owner with one available item, a booker, and a stranger.

use std::sync::Arc;

use crate::adapters::in_memory::in_memory_entity_store::InMemoryEntityStore;
use crate::core::booking::status::BookingStatus;
use crate::core::booking::{Booking, NewBooking};
use crate::core::clock::FixedClock;
use crate::core::item::{Item, NewItem};
use crate::core::ports::{BookingStore, ItemStore, UserStore};
use crate::core::user::{NewUser, User};
use crate::test_support::fixtures::bookings::{hours_from_noon, noon};

pub struct Seeded {
    pub store: Arc<InMemoryEntityStore>,
    pub clock: Arc<FixedClock>,
    pub owner: User,
    pub booker: User,
    pub stranger: User,
    pub item: Item,
}

pub async fn add_user(store: &InMemoryEntityStore, name: &str) -> User {
    store
        .insert_user(NewUser {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .unwrap()
}

pub async fn add_item(store: &InMemoryEntityStore, owner: &User, name: &str, available: bool) -> Item {
    store
        .insert_item(NewItem {
            name: name.into(),
            description: format!("{name} for rent"),
            available,
            owner_id: owner.id,
            request_id: None,
        })
        .await
        .unwrap()
}

/// Stores a booking directly, bypassing the creation rules.
pub async fn add_booking(
    store: &InMemoryEntityStore,
    item: &Item,
    booker: &User,
    window_hours: (i64, i64),
    status: BookingStatus,
) -> Booking {
    store
        .insert_booking(NewBooking {
            start: hours_from_noon(window_hours.0),
            end: hours_from_noon(window_hours.1),
            item_id: item.id,
            booker_id: booker.id,
            status,
        })
        .await
        .unwrap()
}

pub async fn seeded_with(store: InMemoryEntityStore) -> Seeded {
    let owner = add_user(&store, "Owner").await;
    let booker = add_user(&store, "Booker").await;
    let stranger = add_user(&store, "Stranger").await;
    let item = add_item(&store, &owner, "Drill", true).await;
    Seeded {
        store: Arc::new(store),
        clock: Arc::new(FixedClock::at(noon())),
        owner,
        booker,
        stranger,
        item,
    }
}

pub async fn seeded() -> Seeded {
    seeded_with(InMemoryEntityStore::new()).await
}

/// A seeded store whose backend fails every call from now on.
pub async fn seeded_offline() -> Seeded {
    let mut seeded = seeded().await;
    Arc::get_mut(&mut seeded.store).unwrap().toggle_offline();
    seeded
}
