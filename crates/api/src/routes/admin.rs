//! Route definitions for staff account management.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the MSWD role.
///
/// ```text
/// GET  /users  -> list staff accounts
/// POST /users  -> create staff account
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(admin::list_users).post(admin::create_user))
}
