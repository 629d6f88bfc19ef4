//! Route definitions for external agency pension tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::pension;
use crate::state::AppState;

/// Routes mounted at `/pension-records`.
///
/// ```text
/// GET  / -> list (MSWD/DSWD; ?agency, senior_id)
/// POST / -> record an agency entry (DSWD only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(pension::list_records).post(pension::create_record))
}
