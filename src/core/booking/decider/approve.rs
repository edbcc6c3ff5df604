// Pure decision for the owner's approve/reject answer.
//
// Responsibilities
// - Refuse the booker, then anyone who is not the item owner, then a booking that
//   is already approved. The order is observable through the surfaced error.
// - Return the next status. Persisting it is the handler's job.

use crate::core::booking::Booking;
use crate::core::booking::status::BookingStatus;
use crate::core::user::UserId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("no rights to change item status")]
    BookerChangingStatus,
    #[error("only owner may change booking status")]
    NotItemOwner,
    #[error("booking {booking_id} is already approved")]
    AlreadyApproved { booking_id: i64 },
}

pub fn decide_approval(
    booking: &Booking,
    item_owner_id: UserId,
    requester_id: UserId,
    approved: bool,
) -> Result<BookingStatus, ApprovalError> {
    if booking.booker_id == requester_id {
        return Err(ApprovalError::BookerChangingStatus);
    }
    if item_owner_id != requester_id {
        return Err(ApprovalError::NotItemOwner);
    }
    if booking.status == BookingStatus::Approved {
        return Err(ApprovalError::AlreadyApproved {
            booking_id: booking.id,
        });
    }
    Ok(if approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    })
}
