//! Route definitions for scan sessions and device status.
//!
//! The device WebSocket itself lives at the API root (`/ws/scanner`),
//! outside this nest, because the firmware does not send auth headers.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scanner;
use crate::state::AppState;

/// Routes mounted at `/scanner`.
///
/// ```text
/// POST   /sessions          -> start a scan session
/// GET    /sessions/current  -> poll the active session
/// DELETE /sessions/current  -> cancel the active session
/// GET    /status            -> device online/offline state
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(scanner::start_session))
        .route(
            "/sessions/current",
            get(scanner::current_session).delete(scanner::cancel_session),
        )
        .route("/status", get(scanner::get_status))
}
