//! Route definitions for the reconciled masterlist.

use axum::routing::get;
use axum::Router;

use crate::handlers::masterlist;
use crate::state::AppState;

/// Routes mounted at `/masterlist`.
///
/// ```text
/// GET /             -> overall reconciled view
/// GET /pensioners   -> eligible subset
/// GET /export.csv   -> CSV download of the overall view
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(masterlist::get_masterlist))
        .route("/pensioners", get(masterlist::get_pensioners))
        .route("/export.csv", get(masterlist::export_csv))
}
