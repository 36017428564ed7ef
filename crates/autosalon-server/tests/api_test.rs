//! End-to-end HTTP tests: router + services + in-memory SQLite.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use autosalon_core::traits::ICatalogStore;
use autosalon_core::types::car::{CarStatus, FuelType, NewCar, Transmission};
use autosalon_core::AutosalonConfig;
use autosalon_server::build_router;
use autosalon_server::state::AppState;
use autosalon_storage::AutosalonStorageEngine;

struct TestApp {
    router: Router,
    car_ids: Vec<i64>,
    _static_dir: TempDir,
}

fn car(make: &str, model: &str, year: i32, price: f64, status: CarStatus) -> NewCar {
    NewCar {
        make: make.to_string(),
        model: model.to_string(),
        year,
        body_type: "sedan".to_string(),
        transmission: Transmission::Automatic,
        seats: 5,
        doors: 4,
        fuel_type: FuelType::Petrol,
        mileage: 5_000,
        price,
        status,
        image_url: None,
        description: None,
        vin: None,
        color: None,
        engine_volume: None,
        engine_power: None,
    }
}

fn test_app() -> TestApp {
    let engine = Arc::new(AutosalonStorageEngine::open_in_memory().unwrap());
    let cars = [
        car("Toyota", "Camry", 2021, 30_000.0, CarStatus::Available),
        car("Toyota", "Corolla", 2019, 20_000.0, CarStatus::Available),
        car("BMW", "X5", 2022, 70_000.0, CarStatus::Available),
        car("Kia", "Rio", 2018, 12_000.0, CarStatus::Sold),
    ];
    let mut car_ids = Vec::new();
    for c in &cars {
        car_ids.push(engine.insert_car(c).unwrap());
    }

    let static_dir = TempDir::new().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<h1>autosalon</h1>").unwrap();

    let mut config = AutosalonConfig::default();
    config.auth.bcrypt_cost = 4;
    config.auth.jwt_secret = "test-secret".to_string();

    let state = AppState::new(engine, &config);
    TestApp {
        router: build_router(state, static_dir.path()),
        car_ids,
        _static_dir: static_dir,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn register(app: &TestApp, email: &str) -> (String, i64) {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/register",
            json!({ "firstName": "Ivan", "email": email, "password": "hunter2" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    (
        body["token"].as_str().unwrap().to_string(),
        body["userId"].as_i64().unwrap(),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn list_returns_envelope_without_sold_cars() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/cars")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["pages"], 1);
    assert_eq!(body["cars"].as_array().unwrap().len(), 3);
    assert!(body["cars"][0].get("type").is_some());
}

#[tokio::test]
async fn list_filters_and_paginates() {
    let app = test_app();
    let (_, body) = send(&app, get("/api/cars?make=oyo&limit=1&page=2")).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["cars"].as_array().unwrap().len(), 1);
    assert_eq!(body["cars"][0]["model"], "Corolla");

    let (_, body) = send(&app, get("/api/cars?minPrice=100&maxPrice=50")).await;
    assert_eq!(body["total"], 0);

    let (status, body) = send(&app, get("/api/cars?minPrice=abc&page=x")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn repeated_query_keys_are_resolved_not_rejected() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/cars?make=oyo&make=")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["total"], 2);

    let (status, body) = send(&app, get("/api/cars?make=&make=bmw&limit=1&limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["cars"][0]["make"], "BMW");
}

#[tokio::test]
async fn page_count_rounds_up() {
    let app = test_app();
    let (_, body) = send(&app, get("/api/cars?limit=2")).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["pages"], 2);
}

#[tokio::test]
async fn featured_and_facets() {
    let app = test_app();
    let (_, body) = send(&app, get("/api/cars/featured")).await;
    assert_eq!(body["cars"].as_array().unwrap().len(), 3);
    assert_eq!(body["limit"], 3);

    let (status, body) = send(&app, get("/api/cars/facets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["makes"], json!(["BMW", "Kia", "Toyota"]));
    assert_eq!(body["years"], json!([2022, 2021, 2019, 2018]));
    assert_eq!(body["transmissions"], json!(["automatic"]));
}

#[tokio::test]
async fn car_by_id_includes_sold_and_404s_on_unknown() {
    let app = test_app();
    let sold = app.car_ids[3];
    let (status, body) = send(&app, get(&format!("/api/cars/{sold}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Rio");

    let (status, body) = send(&app, get("/api/cars/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CAR_NOT_FOUND");

    let (status, _) = send(&app, get("/api/cars/not-a-number")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Accounts
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn register_then_login() {
    let app = test_app();
    let (_, user_id) = register(&app, "ivan@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/login",
            json!({ "email": "ivan@example.com", "password": "hunter2" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], user_id);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/login",
            json!({ "email": "ivan@example.com", "password": "wrong" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let app = test_app();
    register(&app, "dup@example.com").await;
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/register",
            json!({ "email": "dup@example.com", "password": "x" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMAIL_TAKEN");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_app();
    let request = Request::post("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn profile_requires_valid_token() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/profile")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_REQUIRED");

    let (status, body) = send(&app, authed_get("/api/profile", "garbage")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn profile_read_and_partial_update() {
    let app = test_app();
    let (token, user_id) = register(&app, "profile@example.com").await;

    let (status, body) = send(
        &app,
        json_request(Method::PUT, "/api/profile", json!({ "phone": "+7 900" }), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, authed_get("/api/profile", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id);
    assert_eq!(body["first_name"], "Ivan");
    assert_eq!(body["phone"], "+7 900");
    assert!(body.get("password_hash").is_none());
}

// ═══════════════════════════════════════════════════════════════════════════════
// Orders and test drives
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn order_reserves_car_once() {
    let app = test_app();
    let (token, _) = register(&app, "buyer@example.com").await;
    let car_id = app.car_ids[0];

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/orders",
            json!({ "carId": car_id, "deliveryAddress": "Moscow" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["orderId"].as_i64().is_some());

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/orders", json!({ "carId": car_id }), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CAR_UNAVAILABLE");

    let (_, body) = send(&app, get(&format!("/api/cars/{car_id}"))).await;
    assert_eq!(body["status"], "reserved");

    let (status, body) = send(&app, authed_get("/api/orders", &token)).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["make"], "Toyota");
    assert_eq!(orders[0]["total_price"], 30_000.0);
}

#[tokio::test]
async fn test_drive_booking() {
    let app = test_app();
    let (token, _) = register(&app, "driver@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/test-drives",
            json!({ "carId": app.car_ids[2], "date": "2026-11-01", "time": "10:00" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["testDriveId"].as_i64().is_some());

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/test-drives",
            json!({ "carId": 9999, "date": "2026-11-01", "time": "10:00" }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CAR_NOT_FOUND");

    let (_, body) = send(&app, authed_get("/api/test-drives", &token)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["model"], "X5");
}

// ═══════════════════════════════════════════════════════════════════════════════
// Routing
// ═══════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_and_fallbacks() {
    let app = test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let response = app.router.clone().oneshot(get("/index.html")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>autosalon</h1>");
}
