//! Eligibility reconciliation.
//!
//! Merges the three persisted collections (senior registry, RFID
//! bindings, external agency pension records) plus the DSWD
//! eligibility roster into the unified per-person masterlist the
//! portals and exports render. Pure: operates on snapshots, performs
//! no IO, and treats absent collections as empty.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{age_on, claim_quarter, format_naive};
use crate::identity::normalize_name;
use crate::status::{SeniorStatus, RFID_STATUS_BOUND, RFID_STATUS_NOT_BOUND};
use crate::types::DbId;

/// Registry snapshot of one senior, as read from `senior_citizens`.
#[derive(Debug, Clone)]
pub struct SeniorSnapshot {
    pub id: DbId,
    pub senior_id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub date_of_birth: NaiveDate,
    pub barangay: String,
    /// Stored status; `None` for legacy rows registered before the
    /// status column existed.
    pub status: Option<SeniorStatus>,
    pub rfid_code: Option<String>,
}

/// Snapshot of one RFID binding, as read from `rfid_bindings`.
#[derive(Debug, Clone)]
pub struct BindingSnapshot {
    pub rfid_code: String,
    pub senior_id: DbId,
    pub pension_received: bool,
    pub missed_consecutive: i32,
    pub last_claim_date: Option<NaiveDate>,
}

/// One reconciled masterlist row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasterlistRow {
    pub id: DbId,
    /// Human-assigned 4-digit ID number.
    pub senior_id: String,
    /// Display name: first, middle, last, suffix joined.
    pub name: String,
    /// Birthday formatted as `MMM-DD-YYYY`.
    pub birthday: String,
    pub age: i32,
    pub barangay: String,
    pub status: SeniorStatus,
    /// Set when the stored status is `Removed` but the eligibility
    /// roster matched this person by name. The explicit removal wins;
    /// the flag surfaces the conflict for staff review instead of
    /// letting the roster silently resurrect a removed record.
    pub eligibility_conflict: bool,
    pub rfid_status: &'static str,
    pub rfid_code: Option<String>,
    /// Calendar quarter of the last claim, when one exists.
    pub quarter: Option<u8>,
    pub pension_received: bool,
    pub missed_consecutive: i32,
    /// Formatted last claim date, or `"Never"`.
    pub last_claim_date: String,
    /// Whether any external agency (AFP/GSIS/PVAO/SSS/…) holds a
    /// pension record for this person.
    pub has_agency_pension: bool,
}

/// The reconciled output: every senior, plus the eligible subset.
#[derive(Debug, Clone, Serialize)]
pub struct Masterlist {
    pub overall: Vec<MasterlistRow>,
    pub pensioners: Vec<MasterlistRow>,
}

/// Merge the collections into a [`Masterlist`].
///
/// `agency_senior_ids` is the set of senior ids with at least one
/// external agency pension record. `eligible_keys` is the DSWD roster
/// keyed by [`normalize_name`]. `today` anchors the age computation.
///
/// Status precedence per row:
/// 1. stored status when present, otherwise `Active`;
/// 2. an eligibility-roster name match upgrades the status to
///    `Eligible`, unless the stored status is `Removed`, in which
///    case the row keeps `Removed` and gets `eligibility_conflict`.
pub fn reconcile(
    seniors: &[SeniorSnapshot],
    bindings: &[BindingSnapshot],
    agency_senior_ids: &HashSet<DbId>,
    eligible_keys: &HashSet<String>,
    today: NaiveDate,
) -> Masterlist {
    // One binding per senior by construction; if drift ever produced
    // two, the first wins deterministically.
    let mut by_senior: HashMap<DbId, &BindingSnapshot> = HashMap::new();
    for binding in bindings {
        by_senior.entry(binding.senior_id).or_insert(binding);
    }

    let mut overall = Vec::with_capacity(seniors.len());

    for senior in seniors {
        let key = normalize_name(
            &senior.first_name,
            &senior.middle_name,
            &senior.last_name,
            &senior.suffix,
        );
        let roster_match = eligible_keys.contains(&key);

        let stored = senior.status.unwrap_or(SeniorStatus::Active);
        let (status, eligibility_conflict) = match (stored, roster_match) {
            (SeniorStatus::Removed, true) => (SeniorStatus::Removed, true),
            (SeniorStatus::Removed, false) => (SeniorStatus::Removed, false),
            (_, true) => (SeniorStatus::Eligible, false),
            (s, false) => (s, false),
        };

        let binding = by_senior.get(&senior.id).copied();

        let (rfid_status, rfid_code) = match binding {
            Some(b) => (RFID_STATUS_BOUND, Some(b.rfid_code.clone())),
            // The senior row may carry a code the binding side lost
            // (partial legacy data); surface it but report Not Bound
            // only when neither side has one.
            None => match &senior.rfid_code {
                Some(code) => (RFID_STATUS_BOUND, Some(code.clone())),
                None => (RFID_STATUS_NOT_BOUND, None),
            },
        };

        let last_claim = binding.and_then(|b| b.last_claim_date);

        overall.push(MasterlistRow {
            id: senior.id,
            senior_id: senior.senior_id.clone(),
            name: display_name(senior),
            birthday: format_naive(senior.date_of_birth),
            age: age_on(senior.date_of_birth, today),
            barangay: senior.barangay.clone(),
            status,
            eligibility_conflict,
            rfid_status,
            rfid_code,
            quarter: last_claim.map(claim_quarter),
            pension_received: binding.is_some_and(|b| b.pension_received),
            missed_consecutive: binding.map_or(0, |b| b.missed_consecutive),
            last_claim_date: last_claim
                .map(format_naive)
                .unwrap_or_else(|| "Never".to_string()),
            has_agency_pension: agency_senior_ids.contains(&senior.id),
        });
    }

    let pensioners = overall
        .iter()
        .filter(|row| row.status == SeniorStatus::Eligible)
        .cloned()
        .collect();

    Masterlist { overall, pensioners }
}

/// Join the name parts for display, skipping empties.
fn display_name(senior: &SeniorSnapshot) -> String {
    [
        senior.first_name.as_str(),
        senior.middle_name.as_str(),
        senior.last_name.as_str(),
        senior.suffix.as_str(),
    ]
    .iter()
    .filter(|part| !part.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}
