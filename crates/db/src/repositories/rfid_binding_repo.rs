//! Repository for the `rfid_bindings` table.
//!
//! Bind, unbind, claim, and photo-sync all touch the binding row and
//! the senior row together, so each runs inside a single transaction;
//! an observer never sees one side written without the other.

use chrono::NaiveDate;
use sqlx::PgPool;
use lingap_core::types::DbId;

use crate::models::rfid_binding::RfidBinding;
use crate::models::senior::SeniorCitizen;

/// Column list for `rfid_bindings` queries.
const COLUMNS: &str = "\
    rfid_code, senior_id, first_name, middle_name, last_name, suffix, \
    senior_id_number, barangay, profile_picture, date_bound, \
    rfid_status, pension_received, missed_consecutive, last_claim_date";

/// Provides operations for RFID card bindings.
pub struct RfidBindingRepo;

impl RfidBindingRepo {
    /// Get a binding by card UID.
    pub async fn get(pool: &PgPool, rfid_code: &str) -> Result<Option<RfidBinding>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rfid_bindings WHERE rfid_code = $1");
        sqlx::query_as::<_, RfidBinding>(&query)
            .bind(rfid_code)
            .fetch_optional(pool)
            .await
    }

    /// Whether a binding exists for this card UID.
    pub async fn exists(pool: &PgPool, rfid_code: &str) -> Result<bool, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM rfid_bindings WHERE rfid_code = $1")
                .bind(rfid_code)
                .fetch_one(pool)
                .await?;
        Ok(count > 0)
    }

    /// List all bindings.
    pub async fn list(pool: &PgPool) -> Result<Vec<RfidBinding>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rfid_bindings ORDER BY date_bound DESC");
        sqlx::query_as::<_, RfidBinding>(&query).fetch_all(pool).await
    }

    /// Create a binding from a senior snapshot and mark both sides.
    ///
    /// One transaction covers: the binding insert, the senior's
    /// `rfid_code` update, consuming the scan session (when one drove
    /// the bind), and clearing the device's `last_uid` so the next
    /// scan starts fresh.
    pub async fn bind(
        pool: &PgPool,
        senior: &SeniorCitizen,
        rfid_code: &str,
        scan_session_id: Option<DbId>,
    ) -> Result<RfidBinding, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO rfid_bindings \
             (rfid_code, senior_id, first_name, middle_name, last_name, suffix, \
              senior_id_number, barangay, profile_picture) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let binding = sqlx::query_as::<_, RfidBinding>(&query)
            .bind(rfid_code)
            .bind(senior.id)
            .bind(&senior.first_name)
            .bind(&senior.middle_name)
            .bind(&senior.last_name)
            .bind(&senior.suffix)
            .bind(&senior.senior_id)
            .bind(&senior.barangay)
            .bind(&senior.profile_picture)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE senior_citizens SET rfid_code = $2, updated_at = NOW() WHERE id = $1")
            .bind(senior.id)
            .bind(rfid_code)
            .execute(&mut *tx)
            .await?;

        if let Some(session_id) = scan_session_id {
            sqlx::query(
                "UPDATE scan_sessions SET state = 'consumed', updated_at = NOW() WHERE id = $1",
            )
            .bind(session_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("UPDATE scanner_status SET last_uid = NULL, updated_at = NOW()")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(binding)
    }

    /// Delete a binding and clear the senior's `rfid_code`, in one
    /// transaction. Returns `false` if no binding existed.
    pub async fn unbind(pool: &PgPool, rfid_code: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let senior_id: Option<DbId> =
            sqlx::query_scalar("DELETE FROM rfid_bindings WHERE rfid_code = $1 RETURNING senior_id")
                .bind(rfid_code)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(senior_id) = senior_id else {
            return Ok(false);
        };

        sqlx::query(
            "UPDATE senior_citizens SET rfid_code = NULL, updated_at = NOW() WHERE id = $1",
        )
        .bind(senior_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Record a pension claim against a bound card.
    ///
    /// Updates the binding's claim fields and the senior's claimed
    /// flags together; resets the missed-consecutive counter.
    pub async fn record_claim(
        pool: &PgPool,
        rfid_code: &str,
        claim_date: NaiveDate,
    ) -> Result<Option<RfidBinding>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE rfid_bindings SET \
                pension_received = true, \
                missed_consecutive = 0, \
                last_claim_date = $2 \
             WHERE rfid_code = $1 \
             RETURNING {COLUMNS}"
        );
        let binding = sqlx::query_as::<_, RfidBinding>(&query)
            .bind(rfid_code)
            .bind(claim_date)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(binding) = binding else {
            return Ok(None);
        };

        // The senior row carries the same claim date as the binding,
        // so a backdated claim never leaves the two tables disagreeing.
        sqlx::query(
            "UPDATE senior_citizens SET claimed = true, claimed_date = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(binding.senior_id)
        .bind(claim_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(binding))
    }

    /// Replace the profile picture on the senior row and the binding
    /// snapshot together.
    pub async fn update_photo(
        pool: &PgPool,
        senior_id: DbId,
        profile_picture: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE senior_citizens SET profile_picture = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(senior_id)
        .bind(profile_picture)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        // The senior may be unbound; updating zero binding rows is fine.
        sqlx::query("UPDATE rfid_bindings SET profile_picture = $2 WHERE senior_id = $1")
            .bind(senior_id)
            .bind(profile_picture)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
