//! External agency pension record models and the eligibility roster.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use lingap_core::types::{DbId, Timestamp};

/// A row from the `pension_agency_records` table.
///
/// Read-only ground truth from an external agency; the validation
/// workflow never mutates these, only cross-checks them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PensionAgencyRecord {
    pub id: DbId,
    /// Agency short name (AFP, GSIS, PVAO, SSS, ...).
    pub agency: String,
    pub senior_id: DbId,
    pub pension_source: String,
    pub monthly_income: f64,
    pub monthly_pension: f64,
    pub occupation: String,
    pub created_at: Timestamp,
}

/// DTO for recording an agency pension entry (DSWD portal).
#[derive(Debug, Deserialize)]
pub struct CreatePensionRecord {
    pub agency: String,
    pub senior_id: DbId,
    #[serde(default)]
    pub pension_source: String,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_pension: f64,
    #[serde(default)]
    pub occupation: String,
}

/// A row from the `eligible_names` roster.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EligibleName {
    pub id: DbId,
    pub normalized_name: String,
    pub source: String,
    pub created_at: Timestamp,
}
