//! Route definitions for RFID card bindings.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::bindings;
use crate::state::AppState;

/// Routes mounted at `/bindings`.
///
/// ```text
/// GET    /                 -> list bindings
/// POST   /                 -> bind a card to a senior
/// DELETE /{code}           -> unbind by card code
/// GET    /{code}/id-card   -> printable ID card payload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bindings::list_bindings).post(bindings::create_binding),
        )
        .route("/{code}", delete(bindings::delete_binding))
        .route("/{code}/id-card", get(bindings::get_id_card))
}
