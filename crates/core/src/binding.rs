//! Pre-write guards for the RFID bind workflow.
//!
//! A bind couples one senior to one card UID. Every precondition is
//! checked before anything is written:
//!
//! 1. the selected senior holds no card ([`ensure_senior_unbound`]);
//! 2. the submitted UID has no binding ([`ensure_code_unbound`]);
//! 3. the UID was actually read by the current scan session
//!    ([`ensure_scanned`]).
//!
//! The scan session itself is persisted (one row per scan attempt,
//! arbitrated by token); these guards only interpret its outcome, so
//! they stay pure and unit-testable.

use crate::error::CoreError;

/// Reject a bind when the RFID code already has a binding.
///
/// The existence check runs before any write; a rejection leaves the
/// existing binding untouched.
pub fn ensure_code_unbound(code: &str, already_bound: bool) -> Result<(), CoreError> {
    if already_bound {
        Err(CoreError::Conflict(format!(
            "RFID card {code} is already bound to another senior"
        )))
    } else {
        Ok(())
    }
}

/// Reject a bind when the selected senior already holds a card.
pub fn ensure_senior_unbound(existing_code: Option<&str>) -> Result<(), CoreError> {
    match existing_code {
        Some(code) => Err(CoreError::Conflict(format!(
            "Senior already has RFID card {code}. Unbind it first"
        ))),
        None => Ok(()),
    }
}

/// Require that the current scan session detected the submitted UID.
///
/// `detected` is the UID held by the session in the `detected` state,
/// if any. No detection means the client submitted a code the scanner
/// never saw; a different detection means the submitted code is a
/// stale read from an earlier scan. Both refuse the bind.
pub fn ensure_scanned(detected: Option<&str>, submitted: &str) -> Result<(), CoreError> {
    match detected {
        None => Err(CoreError::Validation(
            "No card detected. Scan the card before binding".to_string(),
        )),
        Some(uid) if uid != submitted => Err(CoreError::Conflict(
            "Submitted card does not match the scanned card. Scan again".to_string(),
        )),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_conflict_guards() {
        assert!(ensure_code_unbound("04AABBCC", false).is_ok());
        let err = ensure_code_unbound("04AABBCC", true).unwrap_err();
        assert!(err.to_string().contains("already bound"));

        assert!(ensure_senior_unbound(None).is_ok());
        let err = ensure_senior_unbound(Some("04AABBCC")).unwrap_err();
        assert!(err.to_string().contains("Unbind it first"));
    }

    #[test]
    fn bind_requires_a_detection() {
        let err = ensure_scanned(None, "04AABBCC").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("No card detected"));
    }

    #[test]
    fn mismatched_detection_is_a_stale_read() {
        let err = ensure_scanned(Some("04DDEEFF"), "04AABBCC").unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
        assert!(err.to_string().contains("Scan again"));
    }

    #[test]
    fn matching_detection_passes() {
        assert!(ensure_scanned(Some("04AABBCC"), "04AABBCC").is_ok());
    }
}
