//! Claim/validation decision rules.
//!
//! A staff operator reviews one senior at a time and records a
//! decision. The eligibility gate cross-checks the external agency
//! pension tables: anyone already drawing a pension elsewhere cannot
//! be marked eligible for the municipal pension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::SeniorStatus;

/// A validation decision an operator can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Eligible,
    Active,
    Removed,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Eligible => "eligible",
            Decision::Active => "active",
            Decision::Removed => "removed",
        }
    }

    /// The senior status this decision writes.
    pub fn resulting_status(self) -> SeniorStatus {
        match self {
            Decision::Eligible => SeniorStatus::Eligible,
            Decision::Active => SeniorStatus::Active,
            Decision::Removed => SeniorStatus::Removed,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eligible" => Ok(Decision::Eligible),
            "active" => Ok(Decision::Active),
            "removed" => Ok(Decision::Removed),
            other => Err(CoreError::Validation(format!(
                "Invalid decision '{other}'. Must be one of: eligible, active, removed"
            ))),
        }
    }
}

/// Gate a decision against the external agency cross-check.
///
/// `agency_sources` lists the agencies holding a pension record for
/// this senior. Any record at all blocks an `Eligible` decision; the
/// other decisions are unaffected. The check is read-then-decide, not
/// atomic; decisions are made interactively by one operator at a time.
pub fn check_decision(decision: Decision, agency_sources: &[String]) -> Result<(), CoreError> {
    if decision == Decision::Eligible && !agency_sources.is_empty() {
        return Err(CoreError::Conflict(format!(
            "Senior already receives a pension from: {}. Cannot be marked eligible",
            agency_sources.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligible_blocked_by_any_agency_record() {
        let sources = vec!["SSS".to_string()];
        let err = check_decision(Decision::Eligible, &sources).unwrap_err();
        assert!(err.to_string().contains("SSS"));
        assert!(err.to_string().contains("Cannot be marked eligible"));
    }

    #[test]
    fn eligible_allowed_without_agency_records() {
        assert!(check_decision(Decision::Eligible, &[]).is_ok());
    }

    #[test]
    fn non_eligible_decisions_unaffected_by_agency_records() {
        let sources = vec!["GSIS".to_string(), "PVAO".to_string()];
        assert!(check_decision(Decision::Active, &sources).is_ok());
        assert!(check_decision(Decision::Removed, &sources).is_ok());
    }

    #[test]
    fn multiple_sources_listed_in_message() {
        let sources = vec!["AFP".to_string(), "SSS".to_string()];
        let err = check_decision(Decision::Eligible, &sources).unwrap_err();
        assert!(err.to_string().contains("AFP, SSS"));
    }

    #[test]
    fn decision_parse_round_trip() {
        for d in [Decision::Eligible, Decision::Active, Decision::Removed] {
            assert_eq!(d.as_str().parse::<Decision>().unwrap(), d);
        }
        assert!("rejected".parse::<Decision>().is_err());
    }

    #[test]
    fn resulting_statuses() {
        assert_eq!(Decision::Eligible.resulting_status(), SeniorStatus::Eligible);
        assert_eq!(Decision::Removed.resulting_status(), SeniorStatus::Removed);
    }
}
