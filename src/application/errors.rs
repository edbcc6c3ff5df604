use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::booking::BookingId;
use crate::core::booking::bucket::UnknownBucket;
use crate::core::booking::decider::approve::ApprovalError;
use crate::core::booking::decider::create::CreateError;
use crate::core::item::ItemId;
use crate::core::pagination::InvalidPage;
use crate::core::ports::StoreError;
use crate::core::user::UserId;

/// Field name to message, as produced by input validation.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("owner cannot book own item")]
    OwnerBooking,

    #[error("user {user_id} may not view booking {booking_id}")]
    NotParticipant { booking_id: BookingId, user_id: UserId },

    #[error("no rights to change item status")]
    BookerChangingStatus,

    #[error("only owner may change booking status")]
    NotItemOwner,

    #[error("user {user_id} may not edit item {item_id}")]
    ItemEditByStranger { item_id: ItemId, user_id: UserId },
}

impl AccessDenied {
    /// Most refusals hide the resource from the caller; a non-owner answering a
    /// booking request is told why instead.
    pub fn reported_as_not_found(&self) -> bool {
        !matches!(self, AccessDenied::NotItemOwner)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    #[error(transparent)]
    Store(StoreError),
}

impl ApplicationError {
    pub fn user_not_found(id: UserId) -> Self {
        Self::NotFound(format!("user {id} not found"))
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::NotFound(format!("item {id} not found"))
    }

    pub fn booking_not_found(id: BookingId) -> Self {
        Self::NotFound(format!("booking {id} not found"))
    }

    pub fn request_not_found(id: i64) -> Self {
        Self::NotFound(format!("request {id} not found"))
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(message) | StoreError::StillReferenced(message) => {
                ApplicationError::Conflict(message)
            }
            other => ApplicationError::Store(other),
        }
    }
}

impl From<UnknownBucket> for ApplicationError {
    fn from(err: UnknownBucket) -> Self {
        ApplicationError::BadRequest(err.to_string())
    }
}

impl From<InvalidPage> for ApplicationError {
    fn from(err: InvalidPage) -> Self {
        ApplicationError::BadRequest(err.to_string())
    }
}

impl From<ApprovalError> for ApplicationError {
    fn from(err: ApprovalError) -> Self {
        match err {
            ApprovalError::BookerChangingStatus => AccessDenied::BookerChangingStatus.into(),
            ApprovalError::NotItemOwner => AccessDenied::NotItemOwner.into(),
            ApprovalError::AlreadyApproved { .. } => ApplicationError::BadRequest(err.to_string()),
        }
    }
}

impl From<CreateError> for ApplicationError {
    fn from(err: CreateError) -> Self {
        match err {
            CreateError::OwnerBooking => AccessDenied::OwnerBooking.into(),
            CreateError::ItemUnavailable { .. } => ApplicationError::BadRequest(err.to_string()),
        }
    }
}
