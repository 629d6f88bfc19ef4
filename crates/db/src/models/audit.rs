//! Audit trail models.

use serde::Serialize;
use sqlx::FromRow;
use lingap_core::types::{DbId, Timestamp};

/// Audit entry status for a completed action.
pub const AUDIT_STATUS_SUCCESS: &str = "SUCCESS";
/// Audit entry status for a rejected or failed action.
pub const AUDIT_STATUS_ERROR: &str = "ERROR";

/// A row from the `audit_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub barangay: String,
    pub action: String,
    pub status: String,
    pub message: String,
    pub performed_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for appending an audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub barangay: String,
    pub action: String,
    pub status: String,
    pub message: String,
    pub performed_by: Option<DbId>,
}
