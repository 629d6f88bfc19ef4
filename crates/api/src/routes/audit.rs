//! Route definitions for the audit trail.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audit-logs`. Requires MSWD or DSWD.
///
/// ```text
/// GET / -> list audit entries (?barangay, limit, offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::list_audit_logs))
}
