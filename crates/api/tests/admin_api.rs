//! HTTP-level integration tests for staff account management.
//!
//! All `/admin` endpoints require the MSWD role.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, seed_staff};
use sqlx::PgPool;
use lingap_core::roles::Role;

// ---------------------------------------------------------------------------
// User creation
// ---------------------------------------------------------------------------

/// MSWD can create a staff account and receives 201 with the row.
#[sqlx::test(migrations = "../db/migrations")]
async fn mswd_creates_user(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "admin@lgu.test", Role::Mswd).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "clerk@lgu.test",
        "password": "a_long_enough_password_1!",
        "role": "osca"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "clerk@lgu.test");
    assert_eq!(json["data"]["role"], "osca");
    // The hash never leaves the server.
    assert!(json["data"]["password_hash"].is_null());
}

/// A role outside the closed set is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_role_rejected(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "admin@lgu.test", Role::Mswd).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "clerk@lgu.test",
        "password": "a_long_enough_password_1!",
        "role": "superuser"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Must be one of: osca, mswd, dswd"));
}

/// A password below the minimum length is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn short_password_rejected(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "admin@lgu.test", Role::Mswd).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "clerk@lgu.test",
        "password": "short",
        "role": "osca"
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A duplicate email surfaces the unique constraint as 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "admin@lgu.test", Role::Mswd).await;

    let body = serde_json::json!({
        "email": "clerk@lgu.test",
        "password": "a_long_enough_password_1!",
        "role": "osca"
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/admin/users", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

/// OSCA and DSWD are forbidden from admin endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn non_mswd_roles_forbidden(pool: PgPool) {
    for (email, role) in [("osca@lgu.test", Role::Osca), ("dswd@lgu.test", Role::Dswd)] {
        let (_id, token) = seed_staff(&pool, email, role).await;
        let app = common::build_test_app(pool.clone());

        let response = get_auth(app, "/api/v1/admin/users", &token).await;
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{email} should be forbidden"
        );
    }
}

/// MSWD can list all staff accounts.
#[sqlx::test(migrations = "../db/migrations")]
async fn mswd_lists_users(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "admin@lgu.test", Role::Mswd).await;
    seed_staff(&pool, "clerk@lgu.test", Role::Osca).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json["data"].as_array().expect("data should be an array");
    assert_eq!(users.len(), 2);
}
