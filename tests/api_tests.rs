//! API integration tests
//!
//! These run against a live server with a fresh database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create a room with a unique number and return its JSON
async fn create_room(client: &Client, number: &str, price: &str) -> Value {
    let response = client
        .post(format!("{}/rooms", BASE_URL))
        .json(&json!({
            "number": number,
            "room_type": "single",
            "base_price": price
        }))
        .send()
        .await
        .expect("Failed to send create room request");

    assert_eq!(response.status(), 201, "room creation should succeed");
    response.json().await.expect("Failed to parse room response")
}

/// Create a guest and return its JSON
async fn create_guest(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/guests", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send create guest request");

    assert_eq!(response.status(), 201, "guest creation should succeed");
    response.json().await.expect("Failed to parse guest response")
}

/// Create a booked reservation and return its JSON
async fn create_reservation(
    client: &Client,
    room_id: i64,
    guest_id: i64,
    check_in: &str,
    check_out: &str,
) -> Value {
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "room_id": room_id,
            "guest_id": guest_id,
            "check_in_date": check_in,
            "check_out_date": check_out
        }))
        .send()
        .await
        .expect("Failed to send create reservation request");

    assert_eq!(response.status(), 201, "reservation creation should succeed");
    response.json().await.expect("Failed to parse reservation response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_reservation_copies_price_and_forces_booked() {
    let client = Client::new();
    let room = create_room(&client, "T101", "100.00").await;
    let guest = create_guest(&client, "Jane Doe").await;

    let reservation = create_reservation(
        &client,
        room["id"].as_i64().unwrap(),
        guest["id"].as_i64().unwrap(),
        "2025-03-01",
        "2025-03-03",
    )
    .await;

    assert_eq!(reservation["status"], "booked");
    assert_eq!(reservation["base_price"], "100.00");
    assert_eq!(reservation["final_price"], "100.00");
    assert_eq!(reservation["discount"], "0.00");
}

#[tokio::test]
#[ignore]
async fn test_create_reservation_rejects_inverted_dates() {
    let client = Client::new();
    let room = create_room(&client, "T102", "80.00").await;
    let guest = create_guest(&client, "John Roe").await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "room_id": room["id"],
            "guest_id": guest["id"],
            "check_in_date": "2025-03-05",
            "check_out_date": "2025-03-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_overlapping_reservation_is_rejected() {
    let client = Client::new();
    let room = create_room(&client, "T103", "120.00").await;
    let guest_a = create_guest(&client, "First Guest").await;
    let guest_b = create_guest(&client, "Second Guest").await;

    create_reservation(
        &client,
        room["id"].as_i64().unwrap(),
        guest_a["id"].as_i64().unwrap(),
        "2025-04-10",
        "2025-04-15",
    )
    .await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "room_id": room["id"],
            "guest_id": guest_b["id"],
            "check_in_date": "2025-04-12",
            "check_out_date": "2025-04-16"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // A back-to-back stay starting on the other's check-out day is fine
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "room_id": room["id"],
            "guest_id": guest_b["id"],
            "check_in_date": "2025-04-15",
            "check_out_date": "2025-04-18"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_check_in_check_out_room_lifecycle() {
    let client = Client::new();
    let room = create_room(&client, "T104", "90.00").await;
    let room_id = room["id"].as_i64().unwrap();
    let guest = create_guest(&client, "Lifecycle Guest").await;

    let reservation = create_reservation(
        &client,
        room_id,
        guest["id"].as_i64().unwrap(),
        "2025-05-01",
        "2025-05-02",
    )
    .await;
    let res_id = reservation["id"].as_i64().unwrap();

    // Check in: reservation -> checked_in, room -> occupied
    let response = client
        .post(format!("{}/reservations/{}/check-in", BASE_URL, res_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let details: Value = response.json().await.unwrap();
    assert_eq!(details["status"], "checked_in");

    let room: Value = client
        .get(format!("{}/rooms/{}", BASE_URL, room_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(room["status"], "occupied");

    // Check out: reservation -> checked_out, room -> cleaning
    let response = client
        .post(format!("{}/reservations/{}/check-out", BASE_URL, res_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let details: Value = response.json().await.unwrap();
    assert_eq!(details["status"], "checked_out");

    let room: Value = client
        .get(format!("{}/rooms/{}", BASE_URL, room_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(room["status"], "cleaning");

    // Mark clean: room -> available
    let response = client
        .post(format!("{}/rooms/{}/clean", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let room: Value = response.json().await.unwrap();
    assert_eq!(room["status"], "available");

    // A second mark-clean is a state conflict
    let response = client
        .post(format!("{}/rooms/{}/clean", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_cancel_only_from_booked() {
    let client = Client::new();
    let room = create_room(&client, "T105", "75.00").await;
    let guest = create_guest(&client, "Cancel Guest").await;

    let reservation = create_reservation(
        &client,
        room["id"].as_i64().unwrap(),
        guest["id"].as_i64().unwrap(),
        "2025-06-01",
        "2025-06-03",
    )
    .await;
    let res_id = reservation["id"].as_i64().unwrap();

    client
        .post(format!("{}/reservations/{}/check-in", BASE_URL, res_id))
        .send()
        .await
        .expect("Failed to send request");

    // Cancelling a checked-in reservation must fail and leave it unchanged
    let response = client
        .post(format!("{}/reservations/{}/cancel", BASE_URL, res_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.unwrap();
    assert!(
        body["message"].as_str().unwrap().contains("checked_in"),
        "state conflict should name the current status"
    );

    let details: Value = client
        .get(format!("{}/reservations/{}", BASE_URL, res_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(details["status"], "checked_in");
}

#[tokio::test]
#[ignore]
async fn test_guest_archive_guard() {
    let client = Client::new();
    let room = create_room(&client, "T106", "60.00").await;
    let guest = create_guest(&client, "Archive Guest").await;
    let guest_id = guest["id"].as_i64().unwrap();

    // A future reservation blocks archival
    create_reservation(
        &client,
        room["id"].as_i64().unwrap(),
        guest_id,
        "2099-01-01",
        "2099-01-05",
    )
    .await;

    let response = client
        .post(format!("{}/guests/{}/archive", BASE_URL, guest_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "HasActiveReservations");
}

#[tokio::test]
#[ignore]
async fn test_empty_partial_update_is_noop_success() {
    let client = Client::new();
    let room = create_room(&client, "T107", "50.00").await;
    let room_id = room["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/rooms/{}", BASE_URL, room_id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["number"], room["number"]);
    assert_eq!(updated["updated_at"], room["updated_at"]);
}

#[tokio::test]
#[ignore]
async fn test_no_show_does_not_touch_room() {
    let client = Client::new();
    let room = create_room(&client, "T108", "55.00").await;
    let room_id = room["id"].as_i64().unwrap();
    let guest = create_guest(&client, "No Show Guest").await;

    let reservation = create_reservation(
        &client,
        room_id,
        guest["id"].as_i64().unwrap(),
        "2025-07-01",
        "2025-07-02",
    )
    .await;

    let response = client
        .post(format!(
            "{}/reservations/{}/no-show",
            BASE_URL,
            reservation["id"].as_i64().unwrap()
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let marked: Value = response.json().await.unwrap();
    assert_eq!(marked["status"], "no_show");

    let room: Value = client
        .get(format!("{}/rooms/{}", BASE_URL, room_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(room["status"], "available");
}

#[tokio::test]
#[ignore]
async fn test_guest_search_matches_name_or_document() {
    let client = Client::new();

    let response = client
        .post(format!("{}/guests", BASE_URL))
        .json(&json!({
            "name": "Searchable Person",
            "document": "XZ-998877"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    for term in ["searchable", "998877"] {
        let guests: Value = client
            .get(format!("{}/guests?search={}", BASE_URL, term))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let found = guests
            .as_array()
            .unwrap()
            .iter()
            .any(|g| g["name"] == "Searchable Person");
        assert!(found, "search term {:?} should match", term);
    }
}

#[tokio::test]
#[ignore]
async fn test_room_archive_guard() {
    let client = Client::new();
    let room = create_room(&client, "T109", "70.00").await;
    let room_id = room["id"].as_i64().unwrap();
    let guest = create_guest(&client, "Room Archive Guest").await;

    let reservation = create_reservation(
        &client,
        room_id,
        guest["id"].as_i64().unwrap(),
        "2099-02-01",
        "2099-02-05",
    )
    .await;

    // A future reservation blocks archival, same as for guests
    let response = client
        .post(format!("{}/rooms/{}/archive", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "HasActiveReservations");

    // Once the reservation is terminal the archive goes through
    let response = client
        .post(format!(
            "{}/reservations/{}/cancel",
            BASE_URL,
            reservation["id"].as_i64().unwrap()
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/rooms/{}/archive", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let archived: Value = response.json().await.unwrap();
    assert_eq!(archived["is_active"], false);
    assert!(archived["archived_at"].is_string());
}

/// Fetch arrivals or departures for a date and report whether the
/// reservation is listed
async fn movement_lists_reservation(
    client: &Client,
    endpoint: &str,
    date: &str,
    reservation_id: i64,
) -> bool {
    let list: Value = client
        .get(format!("{}/front-desk/{}?date={}", BASE_URL, endpoint, date))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    list.as_array()
        .unwrap()
        .iter()
        .any(|r| r["id"].as_i64() == Some(reservation_id))
}

#[tokio::test]
#[ignore]
async fn test_arrivals_and_departures_follow_the_lifecycle() {
    let client = Client::new();
    let room = create_room(&client, "T110", "85.00").await;
    let guest = create_guest(&client, "Movement Guest").await;

    let reservation = create_reservation(
        &client,
        room["id"].as_i64().unwrap(),
        guest["id"].as_i64().unwrap(),
        "2025-09-10",
        "2025-09-12",
    )
    .await;
    let res_id = reservation["id"].as_i64().unwrap();

    // Booked: listed under arrivals for the check-in date only
    assert!(movement_lists_reservation(&client, "arrivals", "2025-09-10", res_id).await);
    assert!(!movement_lists_reservation(&client, "arrivals", "2025-09-11", res_id).await);
    assert!(!movement_lists_reservation(&client, "departures", "2025-09-12", res_id).await);

    let response = client
        .post(format!("{}/reservations/{}/check-in", BASE_URL, res_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Checked in: gone from arrivals, due under departures for check-out day
    assert!(!movement_lists_reservation(&client, "arrivals", "2025-09-10", res_id).await);
    assert!(movement_lists_reservation(&client, "departures", "2025-09-12", res_id).await);

    let response = client
        .post(format!("{}/reservations/{}/check-out", BASE_URL, res_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Checked out: no longer expected anywhere
    assert!(!movement_lists_reservation(&client, "departures", "2025-09-12", res_id).await);
}
