//! Staff account models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use lingap_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `role` holds the canonical lowercase name of a
/// [`lingap_core::roles::Role`]; it is parsed into the enum at the
/// auth boundary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for creating a staff account.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
