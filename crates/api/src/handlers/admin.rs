//! Handlers for the `/admin` resource (staff account management).
//!
//! All handlers require the MSWD role via [`RequireMswd`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use lingap_core::error::CoreError;
use lingap_core::roles::Role;
use lingap_db::models::user::{CreateUser, User};
use lingap_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireMswd;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    /// One of `"osca"`, `"mswd"`, `"dswd"`.
    pub role: String,
}

/// POST /api/v1/admin/users
///
/// Create a staff account. Validates the role against the closed set
/// and the password strength, hashes the password, and returns the
/// created row with 201 Created.
pub async fn create_user(
    State(state): State<AppState>,
    RequireMswd(_admin): RequireMswd,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    // Validate the role against the closed set.
    let role: Role = input.role.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid role '{}'. Must be one of: osca, mswd, dswd",
            input.role
        )))
    })?;

    validate_password_strength(&input.password)?;
    let hashed = hash_password(&input.password)?;

    let create_dto = CreateUser {
        email: input.email,
        password_hash: hashed,
        role: role.as_str().to_string(),
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/admin/users
///
/// List all staff accounts.
pub async fn list_users(
    State(state): State<AppState>,
    RequireMswd(_admin): RequireMswd,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}
