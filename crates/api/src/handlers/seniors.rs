//! Handlers for the `/seniors` resource.
//!
//! Registration, profile updates, validation decisions, quarterly
//! claim recording, and profile photo replacement. Every workflow
//! outcome (success or rejection) produces a barangay notification
//! and an audit entry.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use lingap_core::error::CoreError;
use lingap_core::identity::normalize_name;
use lingap_core::registration::{validate_registration, RegistrationInput};
use lingap_core::types::DbId;
use lingap_core::validation::{check_decision, Decision};
use lingap_db::models::senior::{CreateSenior, SeniorCitizen, UpdateSenior};
use lingap_db::repositories::{
    EligibleNameRepo, PensionRecordRepo, RfidBindingRepo, SeniorRepo,
};
use lingap_db::repositories::senior_repo::SeniorFilter;
use lingap_db::models::rfid_binding::RfidBinding;

use crate::error::{AppError, AppResult};
use crate::handlers::record_outcome;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /seniors`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub barangay: Option<String>,
    pub status: Option<String>,
    /// When true, only seniors with no bound card (the bind screen's
    /// senior picker).
    #[serde(default)]
    pub unbound: bool,
}

/// Request body for `POST /seniors/{id}/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub decision: Decision,
}

/// Request body for `POST /seniors/{id}/claims`.
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    /// Claim date; defaults to today.
    pub claim_date: Option<NaiveDate>,
}

/// Request body for `PUT /seniors/{id}/photo`.
#[derive(Debug, Deserialize)]
pub struct PhotoRequest {
    /// Base64-encoded image payload.
    pub profile_picture: String,
}

// ---------------------------------------------------------------------------
// CRUD handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/seniors
///
/// List seniors, optionally filtered by barangay, status, and
/// unbound-only.
pub async fn list_seniors(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<SeniorCitizen>>>> {
    let filter = SeniorFilter {
        barangay: query.barangay,
        status: query.status,
        unbound_only: query.unbound,
    };
    let seniors = SeniorRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: seniors }))
}

/// POST /api/v1/seniors
///
/// Register a senior. Boundary validation runs before any write; a
/// rejection is audited with status ERROR and nothing is stored.
pub async fn create_senior(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<CreateSenior>,
) -> AppResult<(StatusCode, Json<DataResponse<SeniorCitizen>>)> {
    let today = Utc::now().date_naive();
    let check = RegistrationInput {
        senior_id: &input.senior_id,
        first_name: &input.first_name,
        last_name: &input.last_name,
        date_of_birth: input.date_of_birth,
        contact_number: &input.contact_number,
        barangay: &input.barangay,
    };

    if let Err(e) = validate_registration(&check, today) {
        record_outcome(
            &state,
            "senior.registered",
            &input.barangay,
            Some(staff.user_id),
            None,
            false,
            &format!("Registration of {} {} rejected: {e}", input.first_name, input.last_name),
        )
        .await?;
        return Err(AppError::Core(e));
    }

    let senior = SeniorRepo::create(&state.pool, &input).await?;

    record_outcome(
        &state,
        "senior.registered",
        &senior.barangay,
        Some(staff.user_id),
        Some(("senior", senior.id)),
        true,
        &format!("Registered senior {} {} (ID {})", senior.first_name, senior.last_name, senior.senior_id),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: senior })))
}

/// GET /api/v1/seniors/{id}
pub async fn get_senior(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SeniorCitizen>>> {
    let senior = SeniorRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;
    Ok(Json(DataResponse { data: senior }))
}

/// PUT /api/v1/seniors/{id}
///
/// Update profile fields. The merged result must still satisfy every
/// registration rule, so a partial update cannot sneak an invalid
/// value past the boundary.
pub async fn update_senior(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSenior>,
) -> AppResult<Json<DataResponse<SeniorCitizen>>> {
    let existing = SeniorRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;

    let check = RegistrationInput {
        senior_id: input.senior_id.as_deref().unwrap_or(&existing.senior_id),
        first_name: input.first_name.as_deref().unwrap_or(&existing.first_name),
        last_name: input.last_name.as_deref().unwrap_or(&existing.last_name),
        date_of_birth: input.date_of_birth.unwrap_or(existing.date_of_birth),
        contact_number: input
            .contact_number
            .as_deref()
            .unwrap_or(&existing.contact_number),
        barangay: input.barangay.as_deref().unwrap_or(&existing.barangay),
    };
    validate_registration(&check, Utc::now().date_naive()).map_err(AppError::Core)?;

    let senior = SeniorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;
    Ok(Json(DataResponse { data: senior }))
}

/// DELETE /api/v1/seniors/{id}
///
/// Soft-remove a senior (status = removed). Returns 204 No Content.
pub async fn remove_senior(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let senior = SeniorRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;

    SeniorRepo::soft_remove(&state.pool, id).await?;

    record_outcome(
        &state,
        "senior.validated",
        &senior.barangay,
        Some(staff.user_id),
        Some(("senior", id)),
        true,
        &format!("Removed senior {} {} from the registry", senior.first_name, senior.last_name),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Validation decisions
// ---------------------------------------------------------------------------

/// POST /api/v1/seniors/{id}/validate
///
/// Record a validation decision. An `eligible` decision is gated by
/// the external agency cross-check: any agency pension record blocks
/// it with a 409 and no write.
pub async fn validate_senior(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<ValidateRequest>,
) -> AppResult<Json<DataResponse<SeniorCitizen>>> {
    let senior = SeniorRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;

    let sources = PensionRecordRepo::sources_for_senior(&state.pool, id).await?;

    if let Err(e) = check_decision(input.decision, &sources) {
        record_outcome(
            &state,
            "senior.validated",
            &senior.barangay,
            Some(staff.user_id),
            Some(("senior", id)),
            false,
            &format!(
                "Decision '{}' for {} {} rejected: {e}",
                input.decision, senior.first_name, senior.last_name
            ),
        )
        .await?;
        return Err(AppError::Core(e));
    }

    let status = input.decision.resulting_status();
    SeniorRepo::set_status(&state.pool, id, status.as_str()).await?;

    // A confirmed eligible decision also lands in the roster, so the
    // reconciler picks it up by name.
    if input.decision == Decision::Eligible {
        let key = normalize_name(
            &senior.first_name,
            &senior.middle_name,
            &senior.last_name,
            &senior.suffix,
        );
        EligibleNameRepo::upsert(&state.pool, &key, staff.role.as_str()).await?;
    }

    record_outcome(
        &state,
        "senior.validated",
        &senior.barangay,
        Some(staff.user_id),
        Some(("senior", id)),
        true,
        &format!(
            "Marked {} {} as {}",
            senior.first_name,
            senior.last_name,
            status.label()
        ),
    )
    .await?;

    let updated = SeniorRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Claims and photo
// ---------------------------------------------------------------------------

/// POST /api/v1/seniors/{id}/claims
///
/// Record a quarterly pension claim. Requires a bound card; updates
/// the binding's claim fields and the senior's claimed flags together.
pub async fn record_claim(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<ClaimRequest>,
) -> AppResult<Json<DataResponse<RfidBinding>>> {
    let senior = SeniorRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Senior", id }))?;

    let Some(rfid_code) = senior.rfid_code.clone() else {
        return Err(AppError::Core(CoreError::Validation(
            "Senior has no bound RFID card. Bind a card before recording a claim".to_string(),
        )));
    };

    let claim_date = input.claim_date.unwrap_or_else(|| Utc::now().date_naive());

    let binding = RfidBindingRepo::record_claim(&state.pool, &rfid_code, claim_date)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "No binding found for card {rfid_code}"
            )))
        })?;

    record_outcome(
        &state,
        "claim.recorded",
        &senior.barangay,
        Some(staff.user_id),
        Some(("senior", id)),
        true,
        &format!(
            "Recorded pension claim for {} {} on {claim_date}",
            senior.first_name, senior.last_name
        ),
    )
    .await?;

    Ok(Json(DataResponse { data: binding }))
}

/// PUT /api/v1/seniors/{id}/photo
///
/// Replace the profile photo on the senior row and the binding
/// snapshot together.
pub async fn update_photo(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<PhotoRequest>,
) -> AppResult<StatusCode> {
    if input.profile_picture.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "profile_picture must not be empty".to_string(),
        )));
    }

    let updated = RfidBindingRepo::update_photo(&state.pool, id, &input.profile_picture).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Senior", id }))
    }
}
