//! Repository for the `notifications` table.

use sqlx::PgPool;
use lingap_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, barangay, message, kind, read, created_at";

/// Provides operations for per-barangay notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Append a notification, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateNotification) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications (barangay, message, kind) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.barangay)
        .bind(&input.message)
        .bind(&input.kind)
        .fetch_one(pool)
        .await
    }

    /// List notifications, newest first, optionally scoped to a
    /// barangay and/or unread entries.
    pub async fn list(
        pool: &PgPool,
        barangay: Option<&str>,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM notifications WHERE 1=1");
        if barangay.is_some() {
            query.push_str(" AND barangay = $3");
        }
        if unread_only {
            query.push_str(" AND read = false");
        }
        query.push_str(" ORDER BY created_at DESC LIMIT $1 OFFSET $2");

        let mut q = sqlx::query_as::<_, Notification>(&query).bind(limit).bind(offset);
        if let Some(barangay) = barangay {
            q = q.bind(barangay);
        }
        q.fetch_all(pool).await
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification was found and updated.
    pub async fn mark_read(pool: &PgPool, notification_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE notifications SET read = true WHERE id = $1 AND read = false")
            .bind(notification_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
