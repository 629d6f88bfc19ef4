//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the requirement. Use these in route handlers to enforce authorization
//! at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lingap_core::error::CoreError;
use lingap_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the MSWD role (highest privilege). Rejects with 403 otherwise.
///
/// ```ignore
/// async fn mswd_only(RequireMswd(user): RequireMswd) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireMswd(pub AuthUser);

impl FromRequestParts<AppState> for RequireMswd {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Mswd {
            return Err(AppError::Core(CoreError::Forbidden(
                "MSWD role required".into(),
            )));
        }
        Ok(RequireMswd(user))
    }
}

/// Requires the DSWD role. Rejects with 403 Forbidden otherwise.
pub struct RequireDswd(pub AuthUser);

impl FromRequestParts<AppState> for RequireDswd {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Dswd {
            return Err(AppError::Core(CoreError::Forbidden(
                "DSWD role required".into(),
            )));
        }
        Ok(RequireDswd(user))
    }
}

/// Requires MSWD or DSWD (the oversight roles: audit trail, agency
/// pension tables). Rejects with 403 Forbidden otherwise.
pub struct RequireValidator(pub AuthUser);

impl FromRequestParts<AppState> for RequireValidator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Mswd && user.role != Role::Dswd {
            return Err(AppError::Core(CoreError::Forbidden(
                "MSWD or DSWD role required".into(),
            )));
        }
        Ok(RequireValidator(user))
    }
}

/// Requires any staff role (OSCA, MSWD, or DSWD).
///
/// Functionally equivalent to [`AuthUser`] since every valid role is a
/// staff role, but named explicitly so route definitions read as
/// "this route requires staff authentication".
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireStaff(user))
    }
}
