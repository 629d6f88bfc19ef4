//! Per-barangay notification models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use lingap_core::types::{DbId, Timestamp};

/// Notification severity values accepted by the `kind` column.
pub const NOTIFICATION_KINDS: &[&str] = &["success", "error", "info"];

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub barangay: String,
    pub message: String,
    pub kind: String,
    pub read: bool,
    pub created_at: Timestamp,
}

/// DTO for appending a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub barangay: String,
    pub message: String,
    pub kind: String,
}
