//! Refresh-token session models.

use serde::Serialize;
use sqlx::FromRow;
use lingap_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
///
/// Only the SHA-256 hash of the refresh token is stored, so a
/// database leak does not compromise active sessions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(skip_serializing)]
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked: bool,
    pub created_at: Timestamp,
}
