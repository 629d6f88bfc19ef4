//! Repository for the `senior_citizens` table.

use sqlx::PgPool;
use lingap_core::types::DbId;

use crate::models::senior::{CreateSenior, SeniorCitizen, UpdateSenior};

/// Column list for `senior_citizens` queries.
const COLUMNS: &str = "\
    id, senior_id, first_name, middle_name, last_name, suffix, \
    date_of_birth, gender, contact_number, barangay, address, \
    emergency_contact_name, emergency_contact_number, profile_picture, \
    birth_certificate, valid_id, status, rfid_code, claimed, \
    claimed_date, created_at, updated_at";

/// Filters for listing seniors.
#[derive(Debug, Default, Clone)]
pub struct SeniorFilter {
    pub barangay: Option<String>,
    pub status: Option<String>,
    /// When true, only seniors with no bound card (`rfid_code IS NULL`).
    pub unbound_only: bool,
}

/// Provides CRUD operations for the senior registry.
pub struct SeniorRepo;

impl SeniorRepo {
    /// Register a senior, returning the full row.
    ///
    /// New registrations start with status `pending` until validated.
    pub async fn create(pool: &PgPool, input: &CreateSenior) -> Result<SeniorCitizen, sqlx::Error> {
        let query = format!(
            "INSERT INTO senior_citizens \
             (senior_id, first_name, middle_name, last_name, suffix, \
              date_of_birth, gender, contact_number, barangay, address, \
              emergency_contact_name, emergency_contact_number, \
              profile_picture, birth_certificate, valid_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, 'pending') \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeniorCitizen>(&query)
            .bind(&input.senior_id)
            .bind(&input.first_name)
            .bind(&input.middle_name)
            .bind(&input.last_name)
            .bind(&input.suffix)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(&input.contact_number)
            .bind(&input.barangay)
            .bind(&input.address)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_number)
            .bind(&input.profile_picture)
            .bind(&input.birth_certificate)
            .bind(&input.valid_id)
            .fetch_one(pool)
            .await
    }

    /// Get a senior by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<SeniorCitizen>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM senior_citizens WHERE id = $1");
        sqlx::query_as::<_, SeniorCitizen>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List seniors, optionally filtered by barangay, status, and
    /// unbound-only (the bind screen's senior picker).
    pub async fn list(pool: &PgPool, filter: &SeniorFilter) -> Result<Vec<SeniorCitizen>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM senior_citizens WHERE 1=1");
        if filter.barangay.is_some() {
            query.push_str(" AND barangay = $1");
        }
        if filter.status.is_some() {
            query.push_str(if filter.barangay.is_some() {
                " AND status = $2"
            } else {
                " AND status = $1"
            });
        }
        if filter.unbound_only {
            query.push_str(" AND rfid_code IS NULL");
        }
        query.push_str(" ORDER BY last_name, first_name");

        let mut q = sqlx::query_as::<_, SeniorCitizen>(&query);
        if let Some(barangay) = &filter.barangay {
            q = q.bind(barangay);
        }
        if let Some(status) = &filter.status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Update profile fields. `None` fields keep their current value
    /// (COALESCE pattern).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSenior,
    ) -> Result<Option<SeniorCitizen>, sqlx::Error> {
        let query = format!(
            "UPDATE senior_citizens SET \
                senior_id = COALESCE($2, senior_id), \
                first_name = COALESCE($3, first_name), \
                middle_name = COALESCE($4, middle_name), \
                last_name = COALESCE($5, last_name), \
                suffix = COALESCE($6, suffix), \
                date_of_birth = COALESCE($7, date_of_birth), \
                gender = COALESCE($8, gender), \
                contact_number = COALESCE($9, contact_number), \
                barangay = COALESCE($10, barangay), \
                address = COALESCE($11, address), \
                emergency_contact_name = COALESCE($12, emergency_contact_name), \
                emergency_contact_number = COALESCE($13, emergency_contact_number), \
                birth_certificate = COALESCE($14, birth_certificate), \
                valid_id = COALESCE($15, valid_id), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeniorCitizen>(&query)
            .bind(id)
            .bind(&input.senior_id)
            .bind(&input.first_name)
            .bind(&input.middle_name)
            .bind(&input.last_name)
            .bind(&input.suffix)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(&input.contact_number)
            .bind(&input.barangay)
            .bind(&input.address)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_number)
            .bind(&input.birth_certificate)
            .bind(&input.valid_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a validation decision by setting the status.
    ///
    /// Returns `true` when the senior existed and was updated.
    pub async fn set_status(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE senior_citizens SET status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-remove a senior (status = removed). No hard delete exists
    /// in the reconciliation paths.
    pub async fn soft_remove(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::set_status(pool, id, "removed").await
    }
}
