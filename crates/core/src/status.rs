//! Senior citizen status constants and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a registered senior citizen.
///
/// `Removed` is a soft delete. Removed seniors stay in the registry
/// and are excluded from portal views by filtering, never by a hard
/// DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorStatus {
    Pending,
    Active,
    Eligible,
    Removed,
}

impl SeniorStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SeniorStatus::Pending => "pending",
            SeniorStatus::Active => "active",
            SeniorStatus::Eligible => "eligible",
            SeniorStatus::Removed => "removed",
        }
    }

    /// Display label used in masterlist rows and exports.
    pub fn label(self) -> &'static str {
        match self {
            SeniorStatus::Pending => "Pending",
            SeniorStatus::Active => "Active",
            SeniorStatus::Eligible => "Eligible",
            SeniorStatus::Removed => "Removed",
        }
    }
}

impl fmt::Display for SeniorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeniorStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SeniorStatus::Pending),
            "active" => Ok(SeniorStatus::Active),
            "eligible" => Ok(SeniorStatus::Eligible),
            "removed" => Ok(SeniorStatus::Removed),
            other => Err(CoreError::Validation(format!(
                "Invalid senior status '{other}'. Must be one of: pending, active, eligible, removed"
            ))),
        }
    }
}

/// RFID status label for a senior with a bound card.
pub const RFID_STATUS_BOUND: &str = "Bound";

/// RFID status label for a senior with no card.
pub const RFID_STATUS_NOT_BOUND: &str = "Not Bound";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for status in [
            SeniorStatus::Pending,
            SeniorStatus::Active,
            SeniorStatus::Eligible,
            SeniorStatus::Removed,
        ] {
            assert_eq!(status.as_str().parse::<SeniorStatus>().unwrap(), status);
        }
    }

    #[test]
    fn invalid_status_rejected() {
        assert!("archived".parse::<SeniorStatus>().is_err());
        assert!("".parse::<SeniorStatus>().is_err());
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(SeniorStatus::Eligible.label(), "Eligible");
        assert_eq!(SeniorStatus::Removed.label(), "Removed");
    }
}
