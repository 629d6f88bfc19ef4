//! Handlers for the `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use lingap_core::error::CoreError;
use lingap_core::types::DbId;
use lingap_db::models::notification::Notification;
use lingap_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default page size for notification listings.
const DEFAULT_LIMIT: i64 = 50;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub barangay: Option<String>,
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/notifications
///
/// List notifications, newest first, optionally scoped to a barangay
/// and/or unread entries.
pub async fn list_notifications(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);
    if !(1..=500).contains(&limit) || offset < 0 {
        return Err(AppError::BadRequest(
            "limit must be between 1 and 500, offset non-negative".to_string(),
        ));
    }

    let notifications = NotificationRepo::list(
        &state.pool,
        query.barangay.as_deref(),
        query.unread_only,
        limit,
        offset,
    )
    .await?;
    Ok(Json(DataResponse { data: notifications }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a notification as read. Returns 204 No Content.
pub async fn mark_read(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = NotificationRepo::mark_read(&state.pool, id).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))
    }
}
