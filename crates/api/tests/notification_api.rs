//! HTTP-level integration tests for per-barangay notifications.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, seed_staff};
use sqlx::PgPool;
use lingap_core::roles::Role;
use lingap_db::models::notification::CreateNotification;
use lingap_db::repositories::NotificationRepo;

async fn seed_notification(pool: &PgPool, barangay: &str, message: &str, kind: &str) -> i64 {
    NotificationRepo::create(
        pool,
        &CreateNotification {
            barangay: barangay.to_string(),
            message: message.to_string(),
            kind: kind.to_string(),
        },
    )
    .await
    .expect("notification creation should succeed")
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Listing scopes to a barangay and orders newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_scopes_by_barangay(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    seed_notification(&pool, "Rizal", "first", "info").await;
    seed_notification(&pool, "Mabini", "other barangay", "info").await;
    seed_notification(&pool, "Rizal", "second", "success").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications?barangay=Rizal", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["message"], "second");
    assert_eq!(rows[1]["message"], "first");
}

/// `unread_only` hides notifications that were marked read.
#[sqlx::test(migrations = "../db/migrations")]
async fn unread_only_filters_read(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    let read_id = seed_notification(&pool, "Rizal", "seen", "info").await;
    seed_notification(&pool, "Rizal", "unseen", "info").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/notifications/{read_id}/read"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications?unread_only=true", &token).await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["message"], "unseen");
}

/// An out-of-range limit is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn limit_validated(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications?limit=0", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications?limit=1000", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Mark read
// ---------------------------------------------------------------------------

/// Marking an already-read or unknown notification returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_read_is_single_shot(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    let id = seed_notification(&pool, "Rizal", "note", "info").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/notifications/{id}/read"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Second attempt finds nothing unread.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/notifications/{id}/read"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/notifications/9999/read",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
