//! Repository for the `audit_logs` table.

use sqlx::PgPool;
use lingap_core::types::DbId;

use crate::models::audit::{AuditLog, CreateAuditLog};

/// Column list for `audit_logs` queries.
const COLUMNS: &str = "id, barangay, action, status, message, performed_by, created_at";

/// Provides append and query operations for the audit trail.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an audit entry, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateAuditLog) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO audit_logs (barangay, action, status, message, performed_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.barangay)
        .bind(&input.action)
        .bind(&input.status)
        .bind(&input.message)
        .bind(input.performed_by)
        .fetch_one(pool)
        .await
    }

    /// List audit entries, newest first, optionally scoped to a barangay.
    pub async fn list(
        pool: &PgPool,
        barangay: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM audit_logs WHERE 1=1");
        if barangay.is_some() {
            query.push_str(" AND barangay = $3");
        }
        query.push_str(" ORDER BY created_at DESC LIMIT $1 OFFSET $2");

        let mut q = sqlx::query_as::<_, AuditLog>(&query).bind(limit).bind(offset);
        if let Some(barangay) = barangay {
            q = q.bind(barangay);
        }
        q.fetch_all(pool).await
    }
}
