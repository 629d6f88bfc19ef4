//! Scanner device state and scan-session models.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use lingap_core::types::{DbId, Timestamp};

/// The singleton `scanner_status` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScannerStatus {
    pub online: bool,
    pub last_uid: Option<String>,
    /// Token of the scan session the device is currently serving.
    pub session_token: Option<Uuid>,
    pub updated_at: Timestamp,
}

/// Scan session states as stored in `scan_sessions.state`.
pub const SCAN_STATE_AWAITING: &str = "awaiting";
pub const SCAN_STATE_DETECTED: &str = "detected";
pub const SCAN_STATE_CONSUMED: &str = "consumed";
pub const SCAN_STATE_CANCELLED: &str = "cancelled";

/// A row from the `scan_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScanSession {
    pub id: DbId,
    pub token: Uuid,
    pub started_by: Option<DbId>,
    pub state: String,
    pub detected_uid: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
