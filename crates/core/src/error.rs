//! Domain-level error type shared across the workspace.

use crate::types::DbId;

/// Errors produced by domain logic and surfaced through the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity was looked up by id and does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a boundary validation rule (age, format, range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A read-before-write check found conflicting state (e.g. an RFID
    /// code that is already bound, an existing external pension).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to perform the action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
