//! Repository for the `pension_agency_records` table.

use std::collections::HashSet;

use sqlx::PgPool;
use lingap_core::types::DbId;

use crate::models::pension::{CreatePensionRecord, PensionAgencyRecord};

/// Column list for `pension_agency_records` queries.
const COLUMNS: &str = "\
    id, agency, senior_id, pension_source, monthly_income, \
    monthly_pension, occupation, created_at";

/// Provides operations for external agency pension records.
pub struct PensionRecordRepo;

impl PensionRecordRepo {
    /// Record an agency pension entry.
    ///
    /// The composite uniqueness constraint (`uq_pension_agency_senior`)
    /// rejects a duplicate (agency, senior) pair as a 409.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePensionRecord,
    ) -> Result<PensionAgencyRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO pension_agency_records \
             (agency, senior_id, pension_source, monthly_income, monthly_pension, occupation) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PensionAgencyRecord>(&query)
            .bind(&input.agency)
            .bind(input.senior_id)
            .bind(&input.pension_source)
            .bind(input.monthly_income)
            .bind(input.monthly_pension)
            .bind(&input.occupation)
            .fetch_one(pool)
            .await
    }

    /// List records, optionally filtered by agency and/or senior.
    pub async fn list(
        pool: &PgPool,
        agency: Option<&str>,
        senior_id: Option<DbId>,
    ) -> Result<Vec<PensionAgencyRecord>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM pension_agency_records WHERE 1=1");
        if agency.is_some() {
            query.push_str(" AND agency = $1");
        }
        if senior_id.is_some() {
            query.push_str(if agency.is_some() {
                " AND senior_id = $2"
            } else {
                " AND senior_id = $1"
            });
        }
        query.push_str(" ORDER BY agency, senior_id");

        let mut q = sqlx::query_as::<_, PensionAgencyRecord>(&query);
        if let Some(agency) = agency {
            q = q.bind(agency);
        }
        if let Some(senior_id) = senior_id {
            q = q.bind(senior_id);
        }
        q.fetch_all(pool).await
    }

    /// Agencies holding a pension record for this senior.
    ///
    /// The eligibility gate in the validation workflow rejects an
    /// `eligible` decision whenever this is non-empty.
    pub async fn sources_for_senior(
        pool: &PgPool,
        senior_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT agency FROM pension_agency_records WHERE senior_id = $1 ORDER BY agency",
        )
        .bind(senior_id)
        .fetch_all(pool)
        .await
    }

    /// Set of senior ids with at least one agency record, for the
    /// reconciler.
    pub async fn senior_ids_with_records(pool: &PgPool) -> Result<HashSet<DbId>, sqlx::Error> {
        let ids: Vec<DbId> =
            sqlx::query_scalar("SELECT DISTINCT senior_id FROM pension_agency_records")
                .fetch_all(pool)
                .await?;
        Ok(ids.into_iter().collect())
    }
}
