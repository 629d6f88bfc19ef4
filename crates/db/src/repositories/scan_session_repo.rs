//! Repository for the `scan_sessions` table.
//!
//! Scan sessions arbitrate access to the single physical reader: at
//! most one session is awaiting a card at a time. Starting a new
//! session cancels whatever was in flight, so a UID arriving for the
//! old token can never be attributed to the new request.

use sqlx::PgPool;
use uuid::Uuid;
use lingap_core::types::DbId;

use crate::models::scanner::ScanSession;

/// Column list for `scan_sessions` queries.
const COLUMNS: &str = "id, token, started_by, state, detected_uid, created_at, updated_at";

/// Provides operations for scan-session arbitration.
pub struct ScanSessionRepo;

impl ScanSessionRepo {
    /// Start a session: cancel any in-flight session, create a fresh
    /// `awaiting` row, and point the device at the new token (clearing
    /// its stale UID). All three steps share one transaction, so the
    /// device row and the session table never disagree about which
    /// token is live.
    pub async fn start(
        pool: &PgPool,
        token: Uuid,
        started_by: DbId,
    ) -> Result<ScanSession, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE scan_sessions SET state = 'cancelled', updated_at = NOW() \
             WHERE state IN ('awaiting', 'detected')",
        )
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO scan_sessions (token, started_by, state) \
             VALUES ($1, $2, 'awaiting') \
             RETURNING {COLUMNS}"
        );
        let session = sqlx::query_as::<_, ScanSession>(&query)
            .bind(token)
            .bind(started_by)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE scanner_status SET last_uid = NULL, session_token = $1, updated_at = NOW() \
             WHERE id = TRUE",
        )
        .bind(token)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(session)
    }

    /// The session currently awaiting a card or holding a detection.
    pub async fn current(pool: &PgPool) -> Result<Option<ScanSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scan_sessions \
             WHERE state IN ('awaiting', 'detected') \
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, ScanSession>(&query).fetch_optional(pool).await
    }

    /// Record a device UID report against its session token.
    ///
    /// Only an `awaiting` session with a matching token accepts the
    /// report; anything else returns `None` (stale or unknown token,
    /// discarded by the arbiter).
    pub async fn record_detection(
        pool: &PgPool,
        token: Uuid,
        uid: &str,
    ) -> Result<Option<ScanSession>, sqlx::Error> {
        let query = format!(
            "UPDATE scan_sessions \
             SET state = 'detected', detected_uid = $2, updated_at = NOW() \
             WHERE token = $1 AND state = 'awaiting' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScanSession>(&query)
            .bind(token)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Cancel the in-flight session, if any. Returns the number of
    /// sessions cancelled (0 or 1 in practice).
    pub async fn cancel_current(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE scan_sessions SET state = 'cancelled', updated_at = NOW() \
             WHERE state IN ('awaiting', 'detected')",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
