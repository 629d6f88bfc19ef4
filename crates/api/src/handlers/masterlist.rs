//! Handlers for the reconciled masterlist views and the CSV export.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use lingap_core::export::to_csv;
use lingap_core::reconcile::{reconcile, Masterlist, MasterlistRow};
use lingap_db::repositories::{
    EligibleNameRepo, PensionRecordRepo, RfidBindingRepo, SeniorRepo,
};
use lingap_db::repositories::senior_repo::SeniorFilter;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load every collection and run the reconciler.
///
/// The masterlist is always computed fresh from the stores; nothing
/// derived is persisted.
async fn build_masterlist(state: &AppState) -> Result<Masterlist, sqlx::Error> {
    let seniors = SeniorRepo::list(&state.pool, &SeniorFilter::default()).await?;
    let bindings = RfidBindingRepo::list(&state.pool).await?;
    let agency_ids = PensionRecordRepo::senior_ids_with_records(&state.pool).await?;
    let eligible_keys = EligibleNameRepo::all_keys(&state.pool).await?;

    let senior_snapshots: Vec<_> = seniors.iter().map(|s| s.to_snapshot()).collect();
    let binding_snapshots: Vec<_> = bindings.iter().map(|b| b.to_snapshot()).collect();

    Ok(reconcile(
        &senior_snapshots,
        &binding_snapshots,
        &agency_ids,
        &eligible_keys,
        Utc::now().date_naive(),
    ))
}

/// GET /api/v1/masterlist
///
/// The full reconciled view: every senior plus the eligible subset.
pub async fn get_masterlist(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Masterlist>>> {
    let masterlist = build_masterlist(&state).await?;
    Ok(Json(DataResponse { data: masterlist }))
}

/// GET /api/v1/masterlist/pensioners
///
/// Only the eligible subset.
pub async fn get_pensioners(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<MasterlistRow>>>> {
    let masterlist = build_masterlist(&state).await?;
    Ok(Json(DataResponse {
        data: masterlist.pensioners,
    }))
}

/// GET /api/v1/masterlist/export.csv
///
/// The overall masterlist as a CSV download with the fixed column set.
pub async fn export_csv(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<impl IntoResponse> {
    let masterlist = build_masterlist(&state).await?;
    let csv = to_csv(&masterlist.overall);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"masterlist.csv\"",
            ),
        ],
        csv,
    ))
}
