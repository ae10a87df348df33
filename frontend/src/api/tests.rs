#![cfg(not(coverage))]

use super::*;
use crate::utils::{cookie, jwt};
use httpmock::prelude::*;
use serde_json::json;

fn house_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Lake Cabin",
        "description": "Quiet cabin by the lake",
        "location": "Gabala",
        "pricePerNight": 120.0,
        "roomCount": 3,
        "maxGuests": 6,
        "categoryId": 1,
        "categoryName": "Cabins",
        "images": ["cabin.jpg"],
        "advantages": [{ "id": 1, "name": "Wi-Fi" }],
        "rating": 4.5,
        "bookings": [{ "checkIn": "2025-07-01", "checkOut": "2025-07-04", "status": "Confirmed" }]
    })
}

fn booking_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "houseId": 1,
        "houseName": "Lake Cabin",
        "fullName": "Ayla Guest",
        "email": "ayla@example.com",
        "checkIn": "2025-07-01T00:00:00",
        "checkOut": "2025-07-04T00:00:00",
        "guests": 2,
        "totalPrice": 360.0,
        "status": status
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn house_and_tour_endpoints_parse_payloads() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Houses");
            then.status(200).json_body(json!([house_json(1), house_json(2)]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Houses/1");
            then.status(200).json_body(house_json(1));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Tours");
            then.status(200).json_body(json!([{
                "id": 5,
                "title": "Caucasus Trek",
                "destination": "Sheki",
                "durationDays": 4,
                "packages": [
                    { "id": 1, "name": "Standard", "price": 300.0 },
                    { "id": 2, "name": "Comfort", "price": 450.0 }
                ]
            }]));
        })
        .await;

    let api = client_for(&server);
    let houses = api.list_houses().await.unwrap();
    assert_eq!(houses.len(), 2);
    assert_eq!(houses[0].bookings[0].status, BookingStatus::Confirmed);

    let house = api.get_house(1).await.unwrap();
    assert_eq!(house.max_guests, 6);
    assert_eq!(house.advantages[0].name, "Wi-Fi");

    let tours = api.list_tours().await.unwrap();
    assert_eq!(tours[0].packages.len(), 2);
}

#[tokio::test]
async fn requests_carry_bearer_token_and_request_id() {
    let server = MockServer::start_async().await;
    let token = jwt::encode_unsigned(&json!({ "sub": "u1", "role": "User" }));
    cookie::write_token(&token, Some(3600));

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/Bookings/my")
                .header("authorization", format!("Bearer {}", token))
                .header_exists("x-request-id");
            then.status(200).json_body(json!([booking_json(9, "Pending")]));
        })
        .await;

    let bookings = client_for(&server).my_bookings().await.unwrap();
    mock.assert_async().await;
    assert_eq!(bookings[0].status, BookingStatus::Pending);
    cookie::clear_token();
}

#[tokio::test]
async fn booking_mutations_send_expected_bodies() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/Bookings")
                .json_body_partial(r#"{"houseId":1,"checkIn":"2025-07-01","guests":2}"#);
            then.status(201).json_body(booking_json(9, "Pending"));
        })
        .await;
    let status = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/Bookings/9/status")
                .json_body(json!({ "status": "Confirmed" }));
            then.status(204);
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/Bookings/9");
            then.status(204);
        })
        .await;

    let api = client_for(&server);
    let created = api
        .create_booking(&CreateBooking {
            house_id: 1,
            full_name: "Ayla Guest".into(),
            email: "ayla@example.com".into(),
            phone: None,
            check_in: chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            check_out: chrono::NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            guests: 2,
            total_price: 360.0,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 9);

    api.update_booking_status(9, BookingStatus::Confirmed)
        .await
        .unwrap();
    api.delete_booking(9).await.unwrap();

    create.assert_async().await;
    status.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn login_persists_session_cookie() {
    let server = MockServer::start_async().await;
    let token = jwt::encode_unsigned(&json!({
        "sub": "u1",
        "email": "admin@example.com",
        "role": ["Admin"],
        "exp": 4_102_444_800i64
    }));
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/Auths/login")
                .json_body(json!({ "email": "admin@example.com", "password": "secret" }));
            then.status(200).json_body(json!({ "token": token }));
        })
        .await;

    let response = client_for(&server)
        .login(&LoginRequest {
            email: "admin@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(cookie::read_token().as_deref(), Some(response.token.as_str()));
    cookie::clear_token();
    assert!(cookie::read_token().is_none());
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start_async().await;
    cookie::write_token("stale.token.value", None);
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Users");
            then.status(401);
        })
        .await;

    let error = client_for(&server).list_users().await.unwrap_err();
    assert!(error.is_unauthorized());
    assert!(cookie::read_token().is_none());
}

#[tokio::test]
async fn error_bodies_are_mapped_to_api_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/Auths/register");
            then.status(400).json_body(json!({
                "errors": [{ "code": "DuplicateEmail", "description": "Email is taken" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/Houses/3");
            then.status(409).body("House has bookings");
        })
        .await;

    let api = client_for(&server);
    let register = api
        .register(&RegisterRequest {
            full_name: "Ayla".into(),
            email: "ayla@example.com".into(),
            password: "Secret123!".into(),
            phone: None,
        })
        .await
        .unwrap_err();
    assert_eq!(register.code, "VALIDATION_ERROR");

    let delete = api.delete_house(3).await.unwrap_err();
    assert_eq!(delete.code, "CONFLICT");
    assert_eq!(delete.error, "House has bookings");
}

#[tokio::test]
async fn message_endpoints_accept_empty_and_text_bodies() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/Auths/confirm-email")
                .query_param("userId", "u1")
                .query_param("token", "abc+/=");
            then.status(200).body("Email confirmed");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/Auths/forgot-password");
            then.status(200);
        })
        .await;

    let api = client_for(&server);
    let confirmed = api.confirm_email("u1", "abc+/=").await.unwrap();
    assert_eq!(confirmed.message, "Email confirmed");

    let forgot = api
        .forgot_password(&ForgotPasswordRequest {
            email: "ayla@example.com".into(),
        })
        .await
        .unwrap();
    assert!(forgot.message.is_empty());
}

#[tokio::test]
async fn catalog_faq_and_settings_endpoints() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Categories");
            then.status(200).json_body(json!([{ "id": 1, "name": "Cabins" }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/HouseAdvantages")
                .json_body(json!({ "name": "Pool" }));
            then.status(201).json_body(json!({ "id": 7, "name": "Pool" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Common/faqs");
            then.status(200).json_body(json!([
                { "id": 2, "question": "Pets?", "answer": "Yes", "sortOrder": 2 },
                { "id": 1, "question": "Check-in?", "answer": "14:00", "sortOrder": 1 }
            ]));
        })
        .await;
    let settings = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/Common/settings")
                .json_body(json!([{ "key": "phone", "value": "+994 12 000 00 00" }]));
            then.status(204);
        })
        .await;

    let api = client_for(&server);
    assert_eq!(api.list_categories().await.unwrap()[0].name, "Cabins");
    let advantage = api
        .create_advantage(&AdvantagePayload {
            name: "Pool".into(),
            icon: None,
        })
        .await
        .unwrap();
    assert_eq!(advantage.id, 7);

    let faqs = api.list_faqs().await.unwrap();
    assert_eq!(faqs[0].question, "Check-in?");

    api.update_settings(&[Setting {
        key: "phone".into(),
        value: "+994 12 000 00 00".into(),
    }])
    .await
    .unwrap();
    settings.assert_async().await;
}

#[tokio::test]
async fn user_and_review_validation_short_circuits() {
    let server = MockServer::start_async().await;
    let api = client_for(&server);

    let role = api.update_user_role("u1", "  ").await.unwrap_err();
    assert_eq!(role.code, "VALIDATION_ERROR");

    let review = api
        .create_review(&CreateReview {
            house_id: 1,
            rating: 6,
            comment: "Great".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(review.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn upload_image_posts_multipart_file() {
    let server = MockServer::start_async().await;
    let upload = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/Files/upload")
                .body_contains("name=\"file\"");
            then.status(200).json_body(json!({ "fileName": "abc.png" }));
        })
        .await;

    let response = client_for(&server)
        .upload_image("cabin.png", "image/png", vec![1, 2, 3])
        .await
        .unwrap();
    upload.assert_async().await;
    assert_eq!(response.file_name, "abc.png");
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Houses");
            then.status(200)
                .json_body(json!([]))
                .delay(std::time::Duration::from_millis(500));
        })
        .await;

    let api = ApiClient::new_with_base_url_and_timeout(
        server.url("/api"),
        std::time::Duration::from_millis(50),
    );
    let err = api.list_houses().await.unwrap_err();
    assert_eq!(err.code, "TIMEOUT");
}
