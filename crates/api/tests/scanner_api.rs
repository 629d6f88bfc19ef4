//! HTTP-level integration tests for scan-session arbitration and
//! device status.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, seed_staff};
use sqlx::PgPool;
use uuid::Uuid;
use lingap_core::roles::Role;
use lingap_db::repositories::{ScanSessionRepo, ScannerRepo};
use lingap_events::EventBus;

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

/// Starting a scan while the device is offline fails with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn start_session_requires_online_device(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    let app = common::build_test_app(pool);

    let response =
        post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("offline"));
}

/// Starting a scan with an online device creates an awaiting session
/// and points the device at its token.
#[sqlx::test(migrations = "../db/migrations")]
async fn start_session_creates_awaiting(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    ScannerRepo::set_online(&pool, true).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["state"], "awaiting");
    let session_token = json["data"]["token"].as_str().unwrap().to_string();

    let scanner = ScannerRepo::get(&pool).await.unwrap();
    assert_eq!(
        scanner.session_token.map(|t| t.to_string()),
        Some(session_token)
    );
    assert!(scanner.last_uid.is_none());
}

/// Starting a scan announces the new session token on the event bus,
/// which is how the connected device learns which token to report
/// detections against.
#[sqlx::test(migrations = "../db/migrations")]
async fn start_session_announces_token(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    ScannerRepo::set_online(&pool, true).await.unwrap();

    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();

    let app = common::build_test_app_with_bus(pool, bus);
    let response =
        post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let session_token = json["data"]["token"].as_str().unwrap().to_string();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.event_type, "scan.requested");
    assert_eq!(
        event.payload["session_token"].as_str().unwrap(),
        session_token
    );
}

/// Starting a new scan cancels whatever session was in flight.
#[sqlx::test(migrations = "../db/migrations")]
async fn new_session_cancels_previous(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    ScannerRepo::set_online(&pool, true).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let first = body_json(
        post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await,
    )
    .await;
    let first_token: Uuid = first["data"]["token"].as_str().unwrap().parse().unwrap();

    let app = common::build_test_app(pool.clone());
    let second = body_json(
        post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await,
    )
    .await;
    let second_token: Uuid = second["data"]["token"].as_str().unwrap().parse().unwrap();
    assert_ne!(first_token, second_token);

    // Only the new session is current; a UID reported against the old
    // token is discarded.
    let current = ScanSessionRepo::current(&pool).await.unwrap().unwrap();
    assert_eq!(current.token, second_token);

    let stale = ScanSessionRepo::record_detection(&pool, first_token, "04AABBCC")
        .await
        .unwrap();
    assert!(stale.is_none());
}

/// Polling surfaces a detection recorded against the current token.
#[sqlx::test(migrations = "../db/migrations")]
async fn poll_sees_detection(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    ScannerRepo::set_online(&pool, true).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await,
    )
    .await;
    let session_token: Uuid = created["data"]["token"].as_str().unwrap().parse().unwrap();

    ScanSessionRepo::record_detection(&pool, session_token, "04AABBCC")
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/scanner/sessions/current", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["state"], "detected");
    assert_eq!(json["data"]["detected_uid"], "04AABBCC");
}

/// Cancelling the current session leaves nothing in flight.
#[sqlx::test(migrations = "../db/migrations")]
async fn cancel_clears_current(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    ScannerRepo::set_online(&pool, true).await.unwrap();

    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/v1/scanner/sessions", serde_json::json!({}), &token).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, "/api/v1/scanner/sessions/current", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/scanner/sessions/current", &token).await;
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

// ---------------------------------------------------------------------------
// Device status
// ---------------------------------------------------------------------------

/// The status endpoint reports the singleton device row.
#[sqlx::test(migrations = "../db/migrations")]
async fn status_reports_device_state(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;

    // Freshly migrated: offline, no UID.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/scanner/status", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["online"], false);
    assert!(json["data"]["last_uid"].is_null());

    ScannerRepo::set_online(&pool, true).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/scanner/status", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["online"], true);
}
