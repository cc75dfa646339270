use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use appointment_cell::router::appointment_routes;
use shared_utils::test_utils::{empty_request, json_request, response_json, MockSeedRecords, TestSeed};

#[tokio::test]
async fn test_available_lists_only_open_slots_in_seed_order() {
    let store = TestSeed::clinic().into_store();
    let app = appointment_routes(store);

    let response = app
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            { "id": 1, "status": "available", "patient_id": null },
            { "id": 3, "status": "available", "patient_id": null }
        ])
    );
}

#[tokio::test]
async fn test_available_returns_seed_records_unchanged() {
    let seeded = vec![
        json!({ "id": 1, "patient_id": null, "start_time": "t", "status": "available" }),
        json!({ "id": 2, "status": "available" }),
    ];
    let store = TestSeed::default().with_appointments(seeded.clone()).into_store();

    let response = appointment_routes(store)
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::Value::Array(seeded));
}

#[tokio::test]
async fn test_available_is_stable_without_bookings() {
    let store = TestSeed::clinic().into_store();

    let first = appointment_routes(store.clone())
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();
    let second = appointment_routes(store)
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();

    assert_eq!(response_json(first).await, response_json(second).await);
}

#[tokio::test]
async fn test_available_returns_extra_slot_fields() {
    let store = TestSeed::default()
        .with_appointments(vec![json!({
            "id": 7,
            "status": "available",
            "start_time": "2025-03-01T09:30:00",
            "provider": "Dr. Patel"
        })])
        .into_store();

    let response = appointment_routes(store)
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();

    let (_, json) = response_json(response).await;
    assert_eq!(json[0]["provider"], "Dr. Patel");
    assert_eq!(json[0]["start_time"], "2025-03-01T09:30:00");
}

#[tokio::test]
async fn test_book_then_available_is_empty() {
    let store = TestSeed::default()
        .with_appointments(vec![json!({ "id": 1, "status": "available" })])
        .into_store();

    let response = appointment_routes(store.clone())
        .oneshot(json_request(Method::POST, "/1/book", json!({ "patient_id": 5 })))
        .await
        .unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "message": "Appointment booked successfully",
            "appointment": { "id": 1, "status": "booked", "patient_id": 5 }
        })
    );

    let response = appointment_routes(store)
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();
    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_double_booking_is_rejected_and_keeps_first_patient() {
    let store = TestSeed::clinic().into_store();

    let first = appointment_routes(store.clone())
        .oneshot(json_request(Method::POST, "/3/book", json!({ "patient_id": 10 })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = appointment_routes(store.clone())
        .oneshot(json_request(Method::POST, "/3/book", json!({ "patient_id": 11 })))
        .await
        .unwrap();

    let (status, json) = response_json(second).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "detail": "Appointment not available" }));
    assert_eq!(store.appointment(3).await.unwrap().booked_patient_id(), Some(10));
}

#[tokio::test]
async fn test_book_unknown_appointment_is_not_found() {
    let store = TestSeed::clinic().into_store();

    for body in [json!({ "patient_id": 1 }), json!({ "patient_id": 424242 })] {
        let response = appointment_routes(store.clone())
            .oneshot(json_request(Method::POST, "/99/book", body))
            .await
            .unwrap();

        let (status, json) = response_json(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "detail": "Appointment not found" }));
    }

    assert_eq!(store.available_appointments().await.len(), 2);
}

#[tokio::test]
async fn test_book_accepts_unregistered_patient() {
    let store = TestSeed::clinic().with_patients(vec![]).into_store();

    let response = appointment_routes(store)
        .oneshot(json_request(Method::POST, "/1/book", json!({ "patient_id": 777 })))
        .await
        .unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appointment"]["patient_id"], 777);
}

#[tokio::test]
async fn test_booked_slot_never_listed_as_available() {
    let store = TestSeed::default()
        .with_appointments(vec![
            MockSeedRecords::available_slot(1),
            MockSeedRecords::available_slot(2),
            MockSeedRecords::booked_slot(3, 8),
        ])
        .into_store();

    appointment_routes(store.clone())
        .oneshot(json_request(Method::POST, "/2/book", json!({ "patient_id": 4 })))
        .await
        .unwrap();

    let response = appointment_routes(store)
        .oneshot(empty_request(Method::GET, "/available"))
        .await
        .unwrap();
    let (_, json) = response_json(response).await;

    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|a| a["status"] == "available"));
    assert_eq!(listed[0]["id"], 1);
}

#[tokio::test]
async fn test_book_with_non_integer_id_is_validation_error() {
    let store = TestSeed::clinic().into_store();

    let response = appointment_routes(store)
        .oneshot(json_request(Method::POST, "/abc/book", json!({ "patient_id": 1 })))
        .await
        .unwrap();

    let (status, json) = response_json(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_book_without_patient_id_is_validation_error() {
    let store = TestSeed::clinic().into_store();

    let response = appointment_routes(store.clone())
        .oneshot(json_request(Method::POST, "/1/book", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.appointment(1).await.unwrap().is_available());
}
