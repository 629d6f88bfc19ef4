//! Repository for the `eligible_names` roster.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::models::pension::EligibleName;

/// Column list for `eligible_names` queries.
const COLUMNS: &str = "id, normalized_name, source, created_at";

/// Provides operations for the DSWD eligibility roster.
pub struct EligibleNameRepo;

impl EligibleNameRepo {
    /// Add a roster entry (idempotent on the normalized key).
    pub async fn upsert(
        pool: &PgPool,
        normalized_name: &str,
        source: &str,
    ) -> Result<EligibleName, sqlx::Error> {
        let query = format!(
            "INSERT INTO eligible_names (normalized_name, source) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_eligible_names_key \
             DO UPDATE SET source = EXCLUDED.source \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EligibleName>(&query)
            .bind(normalized_name)
            .bind(source)
            .fetch_one(pool)
            .await
    }

    /// All normalized keys, as a set for the reconciler.
    pub async fn all_keys(pool: &PgPool) -> Result<HashSet<String>, sqlx::Error> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT normalized_name FROM eligible_names")
            .fetch_all(pool)
            .await?;
        Ok(keys.into_iter().collect())
    }
}
