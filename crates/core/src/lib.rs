//! Lingap domain logic.
//!
//! Pure (non-IO) building blocks for the senior-citizen pension
//! management platform: identity normalization, eligibility
//! reconciliation, the RFID bind-session state machine, claim and
//! registration validation, and masterlist/export shaping. The `db`
//! and `api` crates map rows and requests onto these types.

pub mod barangay;
pub mod binding;
pub mod dates;
pub mod error;
pub mod export;
pub mod identity;
pub mod reconcile;
pub mod registration;
pub mod roles;
pub mod status;
pub mod types;
pub mod validation;
