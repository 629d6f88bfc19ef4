//! Handlers for the `/bindings` resource (RFID card lifecycle).
//!
//! The bind endpoint cross-checks the submitted UID against the
//! arbitrated scan session so a stale read from an earlier scan can
//! never be bound. Both success and rejection produce a barangay
//! notification and an audit entry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lingap_core::binding::{ensure_code_unbound, ensure_scanned, ensure_senior_unbound};
use lingap_core::dates::format_naive;
use lingap_core::error::CoreError;
use lingap_core::export::{build_id_card, IdCard, IdCardInput};
use lingap_db::models::rfid_binding::{BindRequest, RfidBinding};
use lingap_db::models::scanner::SCAN_STATE_DETECTED;
use lingap_db::repositories::{RfidBindingRepo, ScanSessionRepo, SeniorRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::record_outcome;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/bindings
pub async fn list_bindings(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<RfidBinding>>>> {
    let bindings = RfidBindingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: bindings }))
}

/// POST /api/v1/bindings
///
/// Execute a bind: one senior, one card UID. Guards run before any
/// write; the actual writes share one transaction.
pub async fn create_binding(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<BindRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<RfidBinding>>)> {
    let senior = SeniorRepo::get(&state.pool, input.senior_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Senior",
            id: input.senior_id,
        }))?;

    // Every bind is driven by the arbitrated scan session: the current
    // session must hold a detection matching the submitted code, and
    // the bind consumes it. A client cannot bind a code the scanner
    // never saw.
    let session = ScanSessionRepo::current(&state.pool).await?;
    let detected = session.as_ref().filter(|s| s.state == SCAN_STATE_DETECTED);
    let detected_uid = detected.and_then(|s| s.detected_uid.as_deref());

    if let Err(e) =
        check_bind_guards(&state, &senior.rfid_code, &input.rfid_code, detected_uid).await?
    {
        record_outcome(
            &state,
            "rfid.bound",
            &senior.barangay,
            Some(staff.user_id),
            Some(("senior", senior.id)),
            false,
            &format!(
                "Bind of card {} to {} {} rejected: {e}",
                input.rfid_code, senior.first_name, senior.last_name
            ),
        )
        .await?;
        return Err(AppError::Core(e));
    }

    let binding =
        RfidBindingRepo::bind(&state.pool, &senior, &input.rfid_code, detected.map(|s| s.id))
            .await?;

    record_outcome(
        &state,
        "rfid.bound",
        &senior.barangay,
        Some(staff.user_id),
        Some(("senior", senior.id)),
        true,
        &format!(
            "Bound card {} to {} {}",
            binding.rfid_code, senior.first_name, senior.last_name
        ),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: binding })))
}

/// Run the pre-write bind guards, returning the domain rejection (if
/// any) so the caller can audit it before surfacing.
async fn check_bind_guards(
    state: &AppState,
    senior_code: &Option<String>,
    rfid_code: &str,
    detected_uid: Option<&str>,
) -> Result<Result<(), CoreError>, AppError> {
    if let Err(e) = ensure_senior_unbound(senior_code.as_deref()) {
        return Ok(Err(e));
    }
    let already_bound = RfidBindingRepo::exists(&state.pool, rfid_code).await?;
    if let Err(e) = ensure_code_unbound(rfid_code, already_bound) {
        return Ok(Err(e));
    }
    Ok(ensure_scanned(detected_uid, rfid_code))
}

/// DELETE /api/v1/bindings/{code}
///
/// Unbind a card: deletes the binding and clears the senior's rfid
/// fields in one transaction. Returns 204 No Content.
pub async fn delete_binding(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    let binding = RfidBindingRepo::get(&state.pool, &code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "No binding found for card {code}"
            )))
        })?;

    RfidBindingRepo::unbind(&state.pool, &code).await?;

    record_outcome(
        &state,
        "rfid.unbound",
        &binding.barangay,
        Some(staff.user_id),
        Some(("senior", binding.senior_id)),
        true,
        &format!(
            "Unbound card {code} from {} {}",
            binding.first_name, binding.last_name
        ),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/bindings/{code}/id-card
///
/// Build the printable ID-card payload from the binding snapshot plus
/// the senior's registry row (birthday and emergency contact).
pub async fn get_id_card(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<IdCard>>> {
    let binding = RfidBindingRepo::get(&state.pool, &code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "No binding found for card {code}"
            )))
        })?;

    let senior = SeniorRepo::get(&state.pool, binding.senior_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Senior",
            id: binding.senior_id,
        }))?;

    let card = build_id_card(IdCardInput {
        senior_id: binding.senior_id_number.clone(),
        name: snapshot_name(&binding),
        birthday: format_naive(senior.date_of_birth),
        barangay: binding.barangay.clone(),
        profile_picture: binding.profile_picture.clone(),
        rfid_code: binding.rfid_code.clone(),
        date_bound: format_naive(binding.date_bound.date_naive()),
        emergency_contact_name: senior.emergency_contact_name,
        emergency_contact_number: senior.emergency_contact_number,
    });

    Ok(Json(DataResponse { data: card }))
}

/// Join the binding's snapshotted name parts, skipping empties.
fn snapshot_name(binding: &RfidBinding) -> String {
    [
        binding.first_name.as_str(),
        binding.middle_name.as_str(),
        binding.last_name.as_str(),
        binding.suffix.as_str(),
    ]
    .iter()
    .filter(|part| !part.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}
