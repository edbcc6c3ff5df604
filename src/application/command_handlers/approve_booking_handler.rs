// Approval handler: the item owner answers a booking request.
//
// Responsibilities
// - Resolve the booking, then the requester, then the booked item.
// - Let the decider pick the next status and write it back in one update.

use std::sync::Arc;

use tracing::info;

use crate::application::errors::ApplicationError;
use crate::application::views::booking_view::BookingView;
use crate::core::booking::decider::approve::decide_approval;
use crate::core::booking::{Booking, BookingId};
use crate::core::ports::EntityStore;
use crate::core::user::UserId;

pub struct ApproveBookingHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ApproveBookingHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        requester_id: UserId,
        booking_id: BookingId,
        approved: bool,
    ) -> Result<BookingView, ApplicationError> {
        let booking = self
            .store
            .find_booking(booking_id)
            .await?
            .ok_or_else(|| ApplicationError::booking_not_found(booking_id))?;
        let requester = self
            .store
            .find_user(requester_id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(requester_id))?;
        let item = self
            .store
            .find_item(booking.item_id)
            .await?
            .ok_or_else(|| ApplicationError::item_not_found(booking.item_id))?;

        let status = decide_approval(&booking, item.owner_id, requester.id, approved)?;
        let booking = self
            .store
            .update_booking(Booking { status, ..booking })
            .await?;
        info!(booking_id, status = ?booking.status, "booking answered");

        let booker = self
            .store
            .find_user(booking.booker_id)
            .await?
            .ok_or_else(|| ApplicationError::user_not_found(booking.booker_id))?;
        Ok(BookingView::new(booking, booker, item))
    }
}
