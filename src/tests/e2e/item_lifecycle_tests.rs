use crate::test_support::fixtures::app::{app, request, send};
use crate::test_support::fixtures::bookings::hours_from_noon;
use crate::test_support::fixtures::store::{Seeded, seeded, seeded_offline};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

async fn book_and_settle(
    seeded: &Seeded,
    booker: i64,
    approved: Option<bool>,
) -> i64 {
    let (status, created) = send(
        app(seeded),
        request(
            Method::POST,
            "/bookings",
            Some(booker),
            Some(json!({
                "itemId": seeded.item.id,
                "start": hours_from_noon(1),
                "end": hours_from_noon(2),
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    if let Some(approved) = approved {
        let (status, _) = send(
            app(seeded),
            request(
                Method::PATCH,
                &format!("/bookings/{id}?approved={approved}"),
                Some(seeded.owner.id),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    id
}

async fn comment(seeded: &Seeded, author: i64) -> (StatusCode, Value) {
    send(
        app(seeded),
        request(
            Method::POST,
            &format!("/items/{}/comment", seeded.item.id),
            Some(author),
            Some(json!({"text": "Worked fine"})),
        ),
    )
    .await
}

#[rstest]
#[tokio::test]
async fn lets_only_finished_approved_bookers_comment() {
    let seeded = seeded().await;
    book_and_settle(&seeded, seeded.booker.id, Some(true)).await;
    book_and_settle(&seeded, seeded.stranger.id, None).await;

    let (status, _) = comment(&seeded, seeded.booker.id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    seeded.clock.set(hours_from_noon(3));

    let (status, body) = comment(&seeded, seeded.booker.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], "2030-01-01T15:00:00");

    let (status, body) = comment(&seeded, seeded.stranger.id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("no finished booking"));
}

async fn owner_view(seeded: &Seeded) -> Value {
    let (_, body) = send(
        app(seeded),
        request(
            Method::GET,
            &format!("/items/{}", seeded.item.id),
            Some(seeded.owner.id),
            None,
        ),
    )
    .await;
    body
}

#[rstest]
#[tokio::test]
async fn reports_an_ongoing_booking_as_the_last_one() {
    let seeded = seeded().await;
    let id = book_and_settle(&seeded, seeded.booker.id, Some(true)).await;

    let before = owner_view(&seeded).await;
    assert_eq!(before["nextBooking"]["id"], id);
    assert_eq!(before["lastBooking"], Value::Null);

    seeded.clock.set(hours_from_noon(1) + chrono::Duration::minutes(30));
    let during = owner_view(&seeded).await;
    assert_eq!(during["lastBooking"]["id"], id);
    assert_eq!(during["nextBooking"], Value::Null);
}

#[rstest]
#[tokio::test]
async fn answers_a_request_with_an_item_and_finds_it_by_search() {
    let seeded = seeded().await;
    let (_, wanted) = send(
        app(&seeded),
        request(
            Method::POST,
            "/requests",
            Some(seeded.stranger.id),
            Some(json!({"description": "Looking for a kayak"})),
        ),
    )
    .await;

    let (status, kayak) = send(
        app(&seeded),
        request(
            Method::POST,
            "/items",
            Some(seeded.owner.id),
            Some(json!({
                "name": "Kayak",
                "description": "Single seat",
                "available": true,
                "requestId": wanted["id"],
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, answered) = send(
        app(&seeded),
        request(
            Method::GET,
            &format!("/requests/{}", wanted["id"]),
            Some(seeded.booker.id),
            None,
        ),
    )
    .await;
    assert_eq!(answered["items"][0]["id"], kayak["id"]);
    assert_eq!(answered["items"][0]["ownerId"], seeded.owner.id);

    let (_, own) = send(
        app(&seeded),
        request(Method::GET, "/requests/all", Some(seeded.stranger.id), None),
    )
    .await;
    assert_eq!(own, json!([]));

    let (_, hits) = send(
        app(&seeded),
        request(Method::GET, "/items/search?text=kAyAk", Some(seeded.booker.id), None),
    )
    .await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "Kayak");
}

#[rstest]
#[tokio::test]
async fn surfaces_store_failures_as_internal_errors() {
    let seeded = seeded_offline().await;
    let (status, body) = send(app(&seeded), request(Method::GET, "/users", None, None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["errors"]["errorMessage"].is_string());
}

#[rstest]
#[tokio::test]
async fn rejects_calls_without_a_numeric_caller() {
    let seeded = seeded().await;
    let (status, _) = send(app(&seeded), request(Method::GET, "/items", None, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
