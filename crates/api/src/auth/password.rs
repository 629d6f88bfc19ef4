//! Staff credential hashing and the account password policy.
//!
//! Hashes are Argon2id in PHC string form, so the parameters and salt
//! travel with the hash and verification needs no side table. Failures
//! surface as [`CoreError`]: a malformed stored hash is an internal
//! fault, never a login rejection.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use lingap_core::error::CoreError;

/// Minimum length for staff account passwords.
pub const MIN_PASSWORD_LEN: usize = 12;

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))
}

/// Check a plaintext password against a stored PHC hash.
///
/// A wrong password is `Ok(false)`; only an unparseable or corrupted
/// stored hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| CoreError::Internal(format!("Stored password hash is invalid: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoreError::Internal(format!(
            "Password verification failed: {e}"
        ))),
    }
}

/// Enforce the staff password policy on account creation.
///
/// Staff accounts gate the whole registry, so the policy asks for
/// length and at least one digit. Length counts characters, not bytes.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }
    Ok(())
}
