use axum::{
    Router,
    routing::{get, post},
};

use crate::adapters::inbound::http::{bookings, items, requests, users};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(users::create).get(users::list))
        .route(
            "/users/{user_id}",
            get(users::get).patch(users::update).delete(users::delete),
        )
        .route("/items", post(items::create).get(items::list_own))
        .route("/items/search", get(items::search))
        .route("/items/{item_id}", get(items::get).patch(items::update))
        .route("/items/{item_id}/comment", post(items::comment))
        .route("/bookings", post(bookings::create).get(bookings::list_for_booker))
        .route("/bookings/owner", get(bookings::list_for_owner))
        .route(
            "/bookings/{booking_id}",
            get(bookings::get).patch(bookings::approve),
        )
        .route("/requests", post(requests::create).get(requests::list_own))
        .route("/requests/all", get(requests::list_others))
        .route("/requests/{request_id}", get(requests::get))
        .with_state(state)
}
