//! RFID binding models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use lingap_core::reconcile::BindingSnapshot;
use lingap_core::types::{DbId, Timestamp};

/// A row from the `rfid_bindings` table, keyed by the card's UID.
///
/// Identity fields are a snapshot of the senior taken at bind time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RfidBinding {
    pub rfid_code: String,
    pub senior_id: DbId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    /// The senior's human-assigned 4-digit ID number at bind time.
    pub senior_id_number: String,
    pub barangay: String,
    pub profile_picture: Option<String>,
    pub date_bound: Timestamp,
    pub rfid_status: String,
    pub pension_received: bool,
    pub missed_consecutive: i32,
    pub last_claim_date: Option<NaiveDate>,
}

impl RfidBinding {
    /// Project this row into the reconciler's input shape.
    pub fn to_snapshot(&self) -> BindingSnapshot {
        BindingSnapshot {
            rfid_code: self.rfid_code.clone(),
            senior_id: self.senior_id,
            pension_received: self.pension_received,
            missed_consecutive: self.missed_consecutive,
            last_claim_date: self.last_claim_date,
        }
    }
}

/// Request body for executing a bind.
#[derive(Debug, Deserialize)]
pub struct BindRequest {
    pub senior_id: DbId,
    /// The detected card UID. The handler cross-checks it against the
    /// arbitrated scan session before writing.
    pub rfid_code: String,
}
