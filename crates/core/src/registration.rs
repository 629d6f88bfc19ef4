//! Registration boundary validation.
//!
//! All rules are enforced here, at the workflow boundary, before any
//! write. The store itself does not enforce them (e.g. `senior_id` is
//! not unique at the database level).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::barangay::validate_barangay;
use crate::dates::age_on;
use crate::error::CoreError;

/// Minimum age at registration time.
pub const MIN_AGE: i32 = 60;

/// PH mobile number: `09` followed by nine digits.
static CONTACT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09\d{9}$").expect("valid contact number regex"));

/// Human-assigned senior ID: exactly four digits.
static SENIOR_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid senior id regex"));

/// Fields checked at registration and profile-update time.
#[derive(Debug, Clone)]
pub struct RegistrationInput<'a> {
    pub senior_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date_of_birth: NaiveDate,
    pub contact_number: &'a str,
    pub barangay: &'a str,
}

/// Validate a registration against all boundary rules.
///
/// `today` is passed in so the age check is deterministic under test.
pub fn validate_registration(input: &RegistrationInput<'_>, today: NaiveDate) -> Result<(), CoreError> {
    if input.first_name.trim().is_empty() {
        return Err(CoreError::Validation("First name is required".to_string()));
    }
    if input.last_name.trim().is_empty() {
        return Err(CoreError::Validation("Last name is required".to_string()));
    }

    if !SENIOR_ID_RE.is_match(input.senior_id) {
        return Err(CoreError::Validation(format!(
            "Senior ID '{}' must be exactly 4 digits",
            input.senior_id
        )));
    }

    let age = age_on(input.date_of_birth, today);
    if age < MIN_AGE {
        return Err(CoreError::Validation(format!(
            "Applicant is {age} years old. Must be at least {MIN_AGE} to register"
        )));
    }

    if !input.contact_number.is_empty() && !CONTACT_NUMBER_RE.is_match(input.contact_number) {
        return Err(CoreError::Validation(format!(
            "Contact number '{}' must be a PH mobile number (09 followed by 9 digits)",
            input.contact_number
        )));
    }

    validate_barangay(input.barangay)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput<'static> {
        RegistrationInput {
            senior_id: "0421",
            first_name: "Juan",
            last_name: "Dela Cruz",
            date_of_birth: NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(),
            contact_number: "09171234567",
            barangay: "Rizal",
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn valid_registration_accepted() {
        assert!(validate_registration(&valid_input(), today()).is_ok());
    }

    #[test]
    fn underage_rejected() {
        let mut input = valid_input();
        let dob = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        input.date_of_birth = dob;
        let err = validate_registration(&input, today()).unwrap_err();
        assert!(err.to_string().contains("at least 60"));
    }

    #[test]
    fn exactly_sixty_accepted() {
        let mut input = valid_input();
        input.date_of_birth = NaiveDate::from_ymd_opt(1965, 6, 1).unwrap();
        assert!(validate_registration(&input, today()).is_ok());
    }

    #[test]
    fn fifty_nine_until_birthday() {
        let mut input = valid_input();
        input.date_of_birth = NaiveDate::from_ymd_opt(1965, 6, 2).unwrap();
        assert!(validate_registration(&input, today()).is_err());
    }

    #[test]
    fn bad_senior_id_rejected() {
        for bad in ["421", "04211", "04a1", ""] {
            let mut input = valid_input();
            input.senior_id = bad;
            assert!(
                validate_registration(&input, today()).is_err(),
                "senior id '{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn bad_contact_number_rejected() {
        for bad in ["0917123456", "091712345678", "+639171234567", "hello"] {
            let mut input = valid_input();
            input.contact_number = bad;
            assert!(
                validate_registration(&input, today()).is_err(),
                "contact number '{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn empty_contact_number_allowed() {
        let mut input = valid_input();
        input.contact_number = "";
        assert!(validate_registration(&input, today()).is_ok());
    }

    #[test]
    fn missing_names_rejected() {
        let mut input = valid_input();
        input.first_name = "  ";
        assert!(validate_registration(&input, today()).is_err());

        let mut input = valid_input();
        input.last_name = "";
        assert!(validate_registration(&input, today()).is_err());
    }

    #[test]
    fn unknown_barangay_rejected() {
        let mut input = valid_input();
        input.barangay = "Nowhere";
        assert!(validate_registration(&input, today()).is_err());
    }
}
