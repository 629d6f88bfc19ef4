//! Repository for the singleton `scanner_status` row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::scanner::ScannerStatus;

/// Column list for `scanner_status` queries.
const COLUMNS: &str = "online, last_uid, session_token, updated_at";

/// Provides operations on the live scanner device state.
pub struct ScannerRepo;

impl ScannerRepo {
    /// Read the device state. The row is seeded by migration and never
    /// deleted.
    pub async fn get(pool: &PgPool) -> Result<ScannerStatus, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scanner_status WHERE id = TRUE");
        sqlx::query_as::<_, ScannerStatus>(&query).fetch_one(pool).await
    }

    /// Flip the online flag (device connect/disconnect).
    pub async fn set_online(pool: &PgPool, online: bool) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE scanner_status SET online = $1, updated_at = NOW() WHERE id = TRUE")
            .bind(online)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a UID read by the device, tagged with its session token.
    pub async fn record_uid(pool: &PgPool, uid: &str, token: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE scanner_status SET last_uid = $1, session_token = $2, updated_at = NOW() \
             WHERE id = TRUE",
        )
        .bind(uid)
        .bind(token)
        .execute(pool)
        .await?;
        Ok(())
    }
}
