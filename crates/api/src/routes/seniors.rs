//! Route definitions for the senior citizen registry.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::seniors;
use crate::state::AppState;

/// Routes mounted at `/seniors`.
///
/// ```text
/// GET    /               -> list (?barangay, status, unbound)
/// POST   /               -> register
/// GET    /{id}           -> fetch one
/// PUT    /{id}           -> update registration fields
/// DELETE /{id}           -> soft-remove
/// POST   /{id}/validate  -> record validation decision (MSWD/DSWD)
/// POST   /{id}/claims    -> record quarterly claim
/// PUT    /{id}/photo     -> replace profile photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(seniors::list_seniors).post(seniors::create_senior))
        .route(
            "/{id}",
            get(seniors::get_senior)
                .put(seniors::update_senior)
                .delete(seniors::remove_senior),
        )
        .route("/{id}/validate", post(seniors::validate_senior))
        .route("/{id}/claims", post(seniors::record_claim))
        .route("/{id}/photo", put(seniors::update_photo))
}
