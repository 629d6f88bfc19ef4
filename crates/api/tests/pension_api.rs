//! HTTP-level integration tests for external agency pension tables.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, seed_senior, seed_staff};
use sqlx::PgPool;
use lingap_core::roles::Role;
use lingap_core::types::DbId;

fn record_body(senior_id: DbId, agency: &str) -> serde_json::Value {
    serde_json::json!({
        "agency": agency,
        "senior_id": senior_id,
        "pension_source": "retirement",
        "monthly_income": 0.0,
        "monthly_pension": 4500.0,
        "occupation": "retired teacher"
    })
}

// ---------------------------------------------------------------------------
// Creation (DSWD only)
// ---------------------------------------------------------------------------

/// DSWD records an agency entry and receives 201.
#[sqlx::test(migrations = "../db/migrations")]
async fn dswd_creates_record(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "dswd@lgu.test", Role::Dswd).await;
    let senior = seed_senior(&pool, "0001", "Juan", "Dela Cruz", "Rizal").await;

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, "GSIS"), &token)
            .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["agency"], "GSIS");
    assert_eq!(json["data"]["senior_id"], senior.id);
    assert_eq!(json["data"]["monthly_pension"], 4500.0);
}

/// OSCA and MSWD cannot create agency records.
#[sqlx::test(migrations = "../db/migrations")]
async fn non_dswd_cannot_create(pool: PgPool) {
    let senior = seed_senior(&pool, "0001", "Juan", "Dela Cruz", "Rizal").await;

    for (email, role) in [("osca@lgu.test", Role::Osca), ("mswd@lgu.test", Role::Mswd)] {
        let (_id, token) = seed_staff(&pool, email, role).await;
        let app = common::build_test_app(pool.clone());
        let response =
            post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, "SSS"), &token)
                .await;
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{email} should be forbidden"
        );
    }
}

/// The same (agency, senior) pair cannot be recorded twice.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_agency_senior_pair_returns_409(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "dswd@lgu.test", Role::Dswd).await;
    let senior = seed_senior(&pool, "0001", "Juan", "Dela Cruz", "Rizal").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, "SSS"), &token)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, "SSS"), &token)
            .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // A different agency for the same senior is fine.
    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, "AFP"), &token)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Recording against an unregistered senior returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn record_for_missing_senior_returns_404(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "dswd@lgu.test", Role::Dswd).await;

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/pension-records", record_body(9999, "SSS"), &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An empty agency name is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn empty_agency_rejected(pool: PgPool) {
    let (_id, token) = seed_staff(&pool, "dswd@lgu.test", Role::Dswd).await;
    let senior = seed_senior(&pool, "0001", "Juan", "Dela Cruz", "Rizal").await;

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, "  "), &token)
            .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing (MSWD/DSWD)
// ---------------------------------------------------------------------------

/// Listing filters by agency and is closed to OSCA.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_and_rbac(pool: PgPool) {
    let (_id, dswd_token) = seed_staff(&pool, "dswd@lgu.test", Role::Dswd).await;
    let (_id, mswd_token) = seed_staff(&pool, "mswd@lgu.test", Role::Mswd).await;
    let (_id, osca_token) = seed_staff(&pool, "osca@lgu.test", Role::Osca).await;
    let senior = seed_senior(&pool, "0001", "Juan", "Dela Cruz", "Rizal").await;

    for agency in ["SSS", "GSIS"] {
        let app = common::build_test_app(pool.clone());
        let response =
            post_json_auth(app, "/api/v1/pension-records", record_body(senior.id, agency), &dswd_token)
                .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/pension-records?agency=SSS", &mswd_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["agency"], "SSS");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/pension-records", &osca_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
