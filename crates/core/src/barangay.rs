//! Barangay constants and validation.
//!
//! The municipality has a fixed set of 15 barangays used as the
//! grouping dimension for registration, notifications, and audit logs.

use crate::error::CoreError;

/// All barangays of the municipality, in alphabetical order.
pub const BARANGAYS: &[&str] = &[
    "Bagong Silang",
    "Calvario",
    "Concepcion",
    "Del Pilar",
    "Lourdes",
    "Mabini",
    "Magsaysay",
    "Poblacion East",
    "Poblacion West",
    "Rizal",
    "San Isidro",
    "San Jose",
    "San Roque",
    "Santa Cruz",
    "Santo Niño",
];

/// Validate that a barangay name is one of the fixed municipal set.
pub fn validate_barangay(name: &str) -> Result<(), CoreError> {
    if BARANGAYS.contains(&name) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown barangay '{name}'. Must be one of the {} municipal barangays",
            BARANGAYS.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_fifteen_barangays() {
        assert_eq!(BARANGAYS.len(), 15);
    }

    #[test]
    fn known_barangay_accepted() {
        assert!(validate_barangay("Poblacion East").is_ok());
        assert!(validate_barangay("Santo Niño").is_ok());
    }

    #[test]
    fn unknown_barangay_rejected() {
        let err = validate_barangay("Atlantis").unwrap_err();
        assert!(err.to_string().contains("Unknown barangay"));
    }

    #[test]
    fn case_mismatch_rejected() {
        assert!(validate_barangay("poblacion east").is_err());
    }
}
