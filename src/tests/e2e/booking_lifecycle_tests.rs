use crate::core::booking::status::BookingStatus;
use crate::test_support::fixtures::app::{app, request, send};
use crate::test_support::fixtures::bookings::hours_from_noon;
use crate::test_support::fixtures::store::{add_booking, add_item, seeded};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

fn booking_body(item_id: i64, start: i64, end: i64) -> Value {
    json!({
        "itemId": item_id,
        "start": hours_from_noon(start),
        "end": hours_from_noon(end),
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect()
}

#[rstest]
#[tokio::test]
async fn books_approves_and_refuses_a_second_approval() {
    let seeded = seeded().await;

    let (status, created) = send(
        app(&seeded),
        request(
            Method::POST,
            "/bookings",
            Some(seeded.booker.id),
            Some(booking_body(seeded.item.id, 1, 2)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "WAITING");
    assert_eq!(created["booker"]["id"], seeded.booker.id);
    assert_eq!(created["item"]["name"], "Drill");
    let id = created["id"].as_i64().unwrap();

    let (status, approved) = send(
        app(&seeded),
        request(
            Method::PATCH,
            &format!("/bookings/{id}?approved=true"),
            Some(seeded.owner.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "APPROVED");

    let (status, _) = send(
        app(&seeded),
        request(
            Method::PATCH,
            &format!("/bookings/{id}?approved=true"),
            Some(seeded.booker.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for decision in ["true", "false"] {
        let (status, body) = send(
            app(&seeded),
            request(
                Method::PATCH,
                &format!("/bookings/{id}?approved={decision}"),
                Some(seeded.owner.id),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    let (_, stored) = send(
        app(&seeded),
        request(Method::GET, &format!("/bookings/{id}"), Some(seeded.booker.id), None),
    )
    .await;
    assert_eq!(stored["status"], "APPROVED");
}

#[rstest]
#[tokio::test]
async fn refuses_self_booking_and_unavailable_items() {
    let seeded = seeded().await;

    let (status, _) = send(
        app(&seeded),
        request(
            Method::POST,
            "/bookings",
            Some(seeded.owner.id),
            Some(booking_body(seeded.item.id, 1, 2)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let ladder = add_item(&seeded.store, &seeded.owner, "Ladder", false).await;
    let (status, body) = send(
        app(&seeded),
        request(
            Method::POST,
            "/bookings",
            Some(99),
            Some(booking_body(ladder.id, 1, 2)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "item not available for booking");

    let (_, listed) = send(
        app(&seeded),
        request(Method::GET, "/bookings/owner", Some(seeded.owner.id), None),
    )
    .await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[tokio::test]
async fn shows_a_booking_only_to_its_booker_and_item_owner() {
    let seeded = seeded().await;
    let booking = add_booking(
        &seeded.store,
        &seeded.item,
        &seeded.booker,
        (1, 2),
        BookingStatus::Waiting,
    )
    .await;
    let uri = format!("/bookings/{}", booking.id);

    for (caller, expected) in [
        (seeded.booker.id, StatusCode::OK),
        (seeded.owner.id, StatusCode::OK),
        (seeded.stranger.id, StatusCode::NOT_FOUND),
    ] {
        let (status, _) = send(app(&seeded), request(Method::GET, &uri, Some(caller), None)).await;
        assert_eq!(status, expected);
    }
}

#[rstest]
#[case(0, 2, 2)]
#[case(2, 2, 1)]
#[case(10, 2, 0)]
#[tokio::test]
async fn pages_a_bookers_bookings(#[case] from: i64, #[case] size: i64, #[case] expected: usize) {
    let seeded = seeded().await;
    for hours in [(1, 2), (3, 4), (5, 6)] {
        add_booking(
            &seeded.store,
            &seeded.item,
            &seeded.booker,
            hours,
            BookingStatus::Waiting,
        )
        .await;
    }

    let (status, body) = send(
        app(&seeded),
        request(
            Method::GET,
            &format!("/bookings?state=ALL&from={from}&size={size}"),
            Some(seeded.booker.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), expected);
}

#[rstest]
#[tokio::test]
async fn lists_newest_start_first_for_both_sides() {
    let seeded = seeded().await;
    let mut created = Vec::new();
    for hours in [(3, 4), (1, 2), (5, 6)] {
        created.push(
            add_booking(
                &seeded.store,
                &seeded.item,
                &seeded.booker,
                hours,
                BookingStatus::Waiting,
            )
            .await
            .id,
        );
    }
    let expected = vec![created[2], created[0], created[1]];

    for (uri, caller) in [
        ("/bookings", seeded.booker.id),
        ("/bookings/owner", seeded.owner.id),
    ] {
        let (_, body) = send(app(&seeded), request(Method::GET, uri, Some(caller), None)).await;
        assert_eq!(ids(&body), expected);
    }
}

#[rstest]
#[case("PAST", 1)]
#[case("FUTURE", 0)]
#[case("CURRENT", 0)]
#[case("ALL", 1)]
#[tokio::test]
async fn classifies_a_finished_booking(#[case] state: &str, #[case] expected: usize) {
    let seeded = seeded().await;
    add_booking(
        &seeded.store,
        &seeded.item,
        &seeded.booker,
        (-2, -1),
        BookingStatus::Approved,
    )
    .await;

    for (uri, caller) in [
        (format!("/bookings?state={state}"), seeded.booker.id),
        (format!("/bookings/owner?state={state}"), seeded.owner.id),
    ] {
        let (status, body) = send(app(&seeded), request(Method::GET, &uri, Some(caller), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), expected);
    }
}

#[rstest]
#[tokio::test]
async fn moves_a_booking_between_buckets_as_the_clock_advances() {
    let seeded = seeded().await;
    add_booking(
        &seeded.store,
        &seeded.item,
        &seeded.booker,
        (1, 3),
        BookingStatus::Approved,
    )
    .await;

    let count = |state: &'static str| {
        let router = app(&seeded);
        let caller = seeded.booker.id;
        async move {
            let (_, body) = send(
                router,
                request(
                    Method::GET,
                    &format!("/bookings?state={state}"),
                    Some(caller),
                    None,
                ),
            )
            .await;
            body.as_array().unwrap().len()
        }
    };

    assert_eq!(count("FUTURE").await, 1);
    seeded.clock.set(hours_from_noon(2));
    assert_eq!(count("CURRENT").await, 1);
    assert_eq!(count("FUTURE").await, 0);
    seeded.clock.set(hours_from_noon(4));
    assert_eq!(count("PAST").await, 1);
    assert_eq!(count("CURRENT").await, 0);
}

#[rstest]
#[tokio::test]
async fn rejects_unknown_states_and_bad_pages() {
    let seeded = seeded().await;
    let (status, body) = send(
        app(&seeded),
        request(Method::GET, "/bookings?state=NOPE", Some(seeded.booker.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown state: NOPE");

    for uri in ["/bookings/owner?from=-1", "/bookings?size=0"] {
        let (status, _) = send(app(&seeded), request(Method::GET, uri, Some(seeded.owner.id), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[rstest]
#[tokio::test]
async fn keeps_bookings_readable_when_deleting_their_booker_is_refused() {
    let seeded = seeded().await;
    let booking = add_booking(
        &seeded.store,
        &seeded.item,
        &seeded.booker,
        (1, 2),
        BookingStatus::Waiting,
    )
    .await;

    let (status, body) = send(
        app(&seeded),
        request(
            Method::DELETE,
            &format!("/users/{}", seeded.booker.id),
            None,
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "user 2 is still referenced by bookings");

    let (status, listed) = send(
        app(&seeded),
        request(Method::GET, "/bookings/owner?state=ALL", Some(seeded.owner.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&listed), vec![booking.id]);

    let (status, single) = send(
        app(&seeded),
        request(
            Method::GET,
            &format!("/bookings/{}", booking.id),
            Some(seeded.owner.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(single["booker"]["name"], "Booker");
}
