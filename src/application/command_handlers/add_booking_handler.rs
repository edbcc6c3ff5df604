// Booking request handler orchestrates the creation flow.
//
// Responsibilities
// - Resolve the item and refuse it when unavailable, before the booker is looked up.
// - Resolve the booker, let the decider build the WAITING booking, and persist it.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use crate::application::errors::ApplicationError;
use crate::application::views::booking_view::BookingView;
use crate::core::booking::decider::create::{decide_create, ensure_bookable};
use crate::core::item::ItemId;
use crate::core::ports::EntityStore;
use crate::core::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBooking {
    pub item_id: ItemId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

pub struct AddBookingHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AddBookingHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        booker_id: UserId,
        command: AddBooking,
    ) -> Result<BookingView, ApplicationError> {
        let item = self
            .store
            .find_item(command.item_id)
            .await?
            .ok_or_else(|| ApplicationError::item_not_found(command.item_id))?;
        ensure_bookable(&item)?;

        let booker = self
            .store
            .find_user(booker_id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(booker_id))?;

        let new_booking = decide_create(&item, &booker, command.start, command.end)?;
        let booking = self.store.insert_booking(new_booking).await?;
        info!(
            booking_id = booking.id,
            item_id = item.id,
            booker_id,
            "booking requested"
        );
        Ok(BookingView::new(booking, booker, item))
    }
}

#[cfg(test)]
mod add_booking_handler_tests {
    use super::*;
    use crate::application::errors::AccessDenied;
    use crate::core::booking::status::BookingStatus;
    use crate::core::ports::{BookingStore, ItemStore};
    use crate::test_support::fixtures::bookings::hours_from_noon;
    use crate::test_support::fixtures::store::{add_item, seeded, seeded_offline};
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> AddBooking {
        AddBooking {
            item_id: 1,
            start: hours_from_noon(1),
            end: hours_from_noon(5),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_a_waiting_booking(command: AddBooking) {
        let seeded = seeded().await;
        let handler = AddBookingHandler::new(seeded.store.clone());

        let view = handler.handle(seeded.booker.id, command).await.unwrap();

        assert_eq!(view.status, BookingStatus::Waiting);
        assert_eq!(view.booker.id, seeded.booker.id);
        assert_eq!(view.item.id, seeded.item.id);
        let stored = seeded.store.find_booking(view.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Waiting);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_the_owner_as_booker(command: AddBooking) {
        let seeded = seeded().await;
        let handler = AddBookingHandler::new(seeded.store.clone());

        let result = handler.handle(seeded.owner.id, command).await;

        assert_eq!(
            result,
            Err(ApplicationError::AccessDenied(AccessDenied::OwnerBooking))
        );
        assert!(
            seeded
                .store
                .find_bookings_by_items(&[seeded.item.id])
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_unavailable_item_before_resolving_the_booker() {
        let seeded = seeded().await;
        let hidden = add_item(&seeded.store, &seeded.owner, "Ladder", false).await;
        let handler = AddBookingHandler::new(seeded.store.clone());

        let result = handler
            .handle(
                999,
                AddBooking {
                    item_id: hidden.id,
                    start: hours_from_noon(1),
                    end: hours_from_noon(2),
                },
            )
            .await;

        assert_eq!(
            result,
            Err(ApplicationError::BadRequest(
                "item not available for booking".into()
            ))
        );
        assert!(seeded.store.find_item(hidden.id).await.unwrap().is_some());
    }

    #[rstest]
    #[case(42, 2, "item 42 not found")]
    #[case(1, 999, "user 999 not found")]
    #[tokio::test]
    async fn it_should_report_missing_entities(
        #[case] item_id: i64,
        #[case] booker_id: i64,
        #[case] message: &str,
    ) {
        let seeded = seeded().await;
        let handler = AddBookingHandler::new(seeded.store.clone());
        let command = AddBooking {
            item_id,
            start: hours_from_noon(1),
            end: hours_from_noon(2),
        };

        let result = handler.handle(booker_id, command).await;

        assert_eq!(result, Err(ApplicationError::NotFound(message.into())));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_store_is_offline(command: AddBooking) {
        let seeded = seeded_offline().await;
        let handler = AddBookingHandler::new(seeded.store.clone());

        let result = handler.handle(seeded.booker.id, command).await;

        assert!(matches!(result, Err(ApplicationError::Store(_))));
    }
}
