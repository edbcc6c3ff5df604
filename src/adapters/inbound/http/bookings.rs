use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use garde::Validate;
use serde::Deserialize;

use crate::adapters::inbound::http::caller::SharerUserId;
use crate::adapters::inbound::http::http_error::{HttpError, respond};
use crate::adapters::inbound::http::validation::field_errors;
use crate::application::command_handlers::add_booking_handler::AddBooking;
use crate::application::errors::{ApplicationError, FieldErrors};
use crate::core::booking::BookingId;
use crate::core::booking::bucket::Bucket;
use crate::core::item::ItemId;
use crate::core::pagination::PageRequest;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[garde(context(NaiveDateTime))]
pub struct AddBookingBody {
    #[garde(required)]
    pub item_id: Option<ItemId>,
    #[garde(required, custom(not_before_now))]
    pub start: Option<NaiveDateTime>,
    #[garde(required, custom(after_now))]
    pub end: Option<NaiveDateTime>,
}

fn not_before_now(start: &Option<NaiveDateTime>, now: &NaiveDateTime) -> garde::Result {
    match start {
        Some(start) if start < now => Err(garde::Error::new(
            "must be a date in the present or in the future",
        )),
        _ => Ok(()),
    }
}

fn after_now(end: &Option<NaiveDateTime>, now: &NaiveDateTime) -> garde::Result {
    match end {
        Some(end) if end <= now => Err(garde::Error::new("must be a date in the future")),
        _ => Ok(()),
    }
}

impl AddBookingBody {
    /// `start` may be now, `end` must be strictly in the future and after `start`.
    pub fn into_command(self, now: NaiveDateTime) -> Result<AddBooking, ApplicationError> {
        let mut errors = match self.validate_with(&now) {
            Ok(()) => FieldErrors::new(),
            Err(report) => field_errors(&report),
        };
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end <= start {
                errors
                    .entry("end".into())
                    .or_insert_with(|| "must be after start".into());
            }
        }

        match (self.item_id, self.start, self.end) {
            (Some(item_id), Some(start), Some(end)) if errors.is_empty() => Ok(AddBooking {
                item_id,
                start,
                end,
            }),
            _ => Err(ApplicationError::Validation(errors)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApproveParams {
    pub approved: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBookingsParams {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl ListBookingsParams {
    /// Defaults: ALL, from 0, size 10.
    pub fn parse(self) -> Result<(Bucket, PageRequest), ApplicationError> {
        let page = PageRequest::new(self.from.unwrap_or(0), self.size.unwrap_or(10))?;
        let bucket = match self.state.as_deref() {
            Some(state) => state.parse()?,
            None => Bucket::All,
        };
        Ok((bucket, page))
    }
}

fn query_rejected(rejection: QueryRejection) -> Response {
    HttpError::bad_request(rejection.body_text()).into_response()
}

pub async fn create(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    body: Result<Json<AddBookingBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return HttpError::unprocessable(rejection.body_text()).into_response(),
    };
    let command = match body.into_command(state.clock.now()) {
        Ok(command) => command,
        Err(err) => return HttpError::from(err).into_response(),
    };
    respond(state.add_booking_handler.handle(caller, command).await)
}

pub async fn approve(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    Path(booking_id): Path<BookingId>,
    params: Result<Query<ApproveParams>, QueryRejection>,
) -> Response {
    let approved = match params {
        Ok(Query(ApproveParams {
            approved: Some(approved),
        })) => approved,
        Ok(_) => return HttpError::bad_request("parameter approved is required").into_response(),
        Err(rejection) => return query_rejected(rejection),
    };
    respond(
        state
            .approve_booking_handler
            .handle(caller, booking_id, approved)
            .await,
    )
}

pub async fn get(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    Path(booking_id): Path<BookingId>,
) -> Response {
    respond(state.booking_queries.get_by_id(caller, booking_id).await)
}

pub async fn list_for_booker(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    params: Result<Query<ListBookingsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejected(rejection),
    };
    match params.parse() {
        Ok((bucket, page)) => respond(
            state
                .booking_queries
                .list_for_booker(caller, bucket, page)
                .await,
        ),
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn list_for_owner(
    State(state): State<AppState>,
    SharerUserId(caller): SharerUserId,
    params: Result<Query<ListBookingsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejected(rejection),
    };
    match params.parse() {
        Ok((bucket, page)) => respond(
            state
                .booking_queries
                .list_for_owner(caller, bucket, page)
                .await,
        ),
        Err(err) => HttpError::from(err).into_response(),
    }
}
