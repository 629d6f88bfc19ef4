//! HTTP error mapping.
//!
//! Domain failures from `lingap_core` carry their own taxonomy
//! (validation, conflict, auth, missing records); this module
//! translates them, plus sqlx failures, into the `{ "error", "code" }`
//! JSON body every endpoint returns on failure. Constraint violations
//! from the schema are folded into the same taxonomy: `uq_` uniqueness
//! means a duplicate workflow entity (409), foreign keys and checks
//! mean the payload referenced something that is not there (400).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use lingap_core::error::CoreError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lingap_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// What a failure looks like on the wire.
struct WireError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl WireError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// The sanitized 500 every unexpected failure collapses to.
    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        )
    }
}

impl AppError {
    fn wire(&self) -> WireError {
        match self {
            AppError::Core(core) => Self::wire_core(core),
            AppError::Database(err) => Self::wire_sqlx(err),
            AppError::BadRequest(msg) => {
                WireError::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                WireError::internal()
            }
        }
    }

    fn wire_core(core: &CoreError) -> WireError {
        match core {
            CoreError::Validation(msg) => {
                WireError::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            CoreError::Conflict(msg) => WireError::new(StatusCode::CONFLICT, "CONFLICT", msg),
            CoreError::Unauthorized(msg) => {
                WireError::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            CoreError::Forbidden(msg) => WireError::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            CoreError::NotFound { entity, id } => WireError::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                WireError::internal()
            }
        }
    }

    /// Fold sqlx failures into the domain taxonomy where the schema
    /// encodes one, otherwise collapse to a sanitized 500.
    fn wire_sqlx(err: &sqlx::Error) -> WireError {
        let db_err = match err {
            sqlx::Error::RowNotFound => {
                return WireError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Record not found");
            }
            sqlx::Error::Database(db_err) => db_err,
            other => {
                tracing::error!(error = %other, "Database error");
                return WireError::internal();
            }
        };

        match db_err.code().as_deref() {
            // Unique violation on a uq_ constraint: a duplicate
            // workflow entity (email, card, agency record).
            Some("23505") if db_err.constraint().is_some_and(|c| c.starts_with("uq_")) => {
                WireError::new(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!(
                        "Duplicate record: {}",
                        db_err.constraint().unwrap_or_default()
                    ),
                )
            }
            // Foreign key violation: the payload referenced a row
            // that does not exist (or was removed meanwhile).
            Some("23503") => WireError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Referenced record does not exist",
            ),
            // Check violation: a value outside the column's closed set.
            Some("23514") => WireError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Value rejected by a schema constraint",
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                WireError::internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let wire = self.wire();
        let body = json!({
            "error": wire.message,
            "code": wire.code,
        });
        (wire.status, axum::Json(body)).into_response()
    }
}
