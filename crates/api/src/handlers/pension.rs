//! Handlers for the `/pension-records` resource.
//!
//! External agency pension tables are ground truth recorded by DSWD;
//! the validation workflow reads them but never mutates them.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use lingap_core::error::CoreError;
use lingap_core::types::DbId;
use lingap_db::models::pension::{CreatePensionRecord, PensionAgencyRecord};
use lingap_db::repositories::{PensionRecordRepo, SeniorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireDswd, RequireValidator};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /pension-records`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub agency: Option<String>,
    pub senior_id: Option<DbId>,
}

/// GET /api/v1/pension-records
///
/// List agency records, optionally filtered by agency and/or senior.
pub async fn list_records(
    State(state): State<AppState>,
    RequireValidator(_user): RequireValidator,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<PensionAgencyRecord>>>> {
    let records =
        PensionRecordRepo::list(&state.pool, query.agency.as_deref(), query.senior_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// POST /api/v1/pension-records
///
/// Record an agency pension entry for a registered senior. A duplicate
/// (agency, senior) pair surfaces as a 409 via the uniqueness
/// constraint.
pub async fn create_record(
    State(state): State<AppState>,
    RequireDswd(_dswd): RequireDswd,
    Json(input): Json<CreatePensionRecord>,
) -> AppResult<(StatusCode, Json<DataResponse<PensionAgencyRecord>>)> {
    if input.agency.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "agency is required".to_string(),
        )));
    }

    // The record must point at a registered senior.
    SeniorRepo::get(&state.pool, input.senior_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Senior",
            id: input.senior_id,
        }))?;

    let record = PensionRecordRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
