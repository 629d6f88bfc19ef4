//! Handlers for the `/audit-logs` resource (MSWD/DSWD oversight).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use lingap_db::models::audit::AuditLog;
use lingap_db::repositories::AuditLogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireValidator;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default page size for audit listings.
const DEFAULT_LIMIT: i64 = 100;

/// Query parameters for `GET /audit-logs`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub barangay: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/audit-logs
///
/// List audit entries, newest first, optionally scoped to a barangay.
pub async fn list_audit_logs(
    State(state): State<AppState>,
    RequireValidator(_user): RequireValidator,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<AuditLog>>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);
    if !(1..=1000).contains(&limit) || offset < 0 {
        return Err(AppError::BadRequest(
            "limit must be between 1 and 1000, offset non-negative".to_string(),
        ));
    }

    let logs = AuditLogRepo::list(&state.pool, query.barangay.as_deref(), limit, offset).await?;
    Ok(Json(DataResponse { data: logs }))
}
