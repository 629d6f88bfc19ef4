//! Senior citizen registry models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use lingap_core::reconcile::SeniorSnapshot;
use lingap_core::status::SeniorStatus;
use lingap_core::types::{DbId, Timestamp};

/// A row from the `senior_citizens` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeniorCitizen {
    pub id: DbId,
    /// Human-assigned 4-digit ID number. Not unique at the store level.
    pub senior_id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub contact_number: String,
    pub barangay: String,
    pub address: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub profile_picture: Option<String>,
    pub birth_certificate: Option<String>,
    pub valid_id: Option<String>,
    /// Nullable for legacy rows; the reconciler defaults to `active`.
    pub status: Option<String>,
    pub rfid_code: Option<String>,
    pub claimed: bool,
    pub claimed_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SeniorCitizen {
    /// Project this row into the reconciler's input shape.
    ///
    /// A stored status string that fails to parse is treated like an
    /// unset status rather than failing the whole masterlist.
    pub fn to_snapshot(&self) -> SeniorSnapshot {
        SeniorSnapshot {
            id: self.id,
            senior_id: self.senior_id.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            suffix: self.suffix.clone(),
            date_of_birth: self.date_of_birth,
            barangay: self.barangay.clone(),
            status: self
                .status
                .as_deref()
                .and_then(|s| s.parse::<SeniorStatus>().ok()),
            rfid_code: self.rfid_code.clone(),
        }
    }
}

/// DTO for registering a senior.
#[derive(Debug, Deserialize)]
pub struct CreateSenior {
    pub senior_id: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub suffix: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub contact_number: String,
    pub barangay: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_number: String,
    pub profile_picture: Option<String>,
    pub birth_certificate: Option<String>,
    pub valid_id: Option<String>,
}

/// DTO for updating a senior's profile (all fields optional).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSenior {
    pub senior_id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub barangay: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub birth_certificate: Option<String>,
    pub valid_id: Option<String>,
}
