pub mod admin;
pub mod audit;
pub mod auth;
pub mod bindings;
pub mod health;
pub mod masterlist;
pub mod notifications;
pub mod pension;
pub mod scanner;
pub mod seniors;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws/scanner                         reader firmware WebSocket
///
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
/// /auth/me                            resolve user + portal path
///
/// /admin/users                        list, create staff (MSWD only)
///
/// /seniors                            list, register
/// /seniors/{id}                       get, update, soft-remove
/// /seniors/{id}/validate              record validation decision
/// /seniors/{id}/claims                record quarterly claim
/// /seniors/{id}/photo                 replace profile photo
///
/// /masterlist                         reconciled overall view
/// /masterlist/pensioners              eligible subset
/// /masterlist/export.csv              CSV download
///
/// /bindings                           list, bind
/// /bindings/{code}                    unbind
/// /bindings/{code}/id-card            printable ID payload
///
/// /scanner/sessions                   start scan (POST)
/// /scanner/sessions/current           poll, cancel
/// /scanner/status                     device state
///
/// /notifications                      list (?barangay, unread_only, limit, offset)
/// /notifications/{id}/read            mark read (POST)
///
/// /audit-logs                         list (MSWD/DSWD)
///
/// /pension-records                    list (MSWD/DSWD), create (DSWD)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Device WebSocket.
        .route("/ws/scanner", get(handlers::scanner::scanner_ws_handler))
        // Authentication routes (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Staff account management (MSWD only).
        .nest("/admin", admin::router())
        // Senior registry and workflows.
        .nest("/seniors", seniors::router())
        // Reconciled masterlist views and CSV export.
        .nest("/masterlist", masterlist::router())
        // RFID bindings and the printable ID card.
        .nest("/bindings", bindings::router())
        // Scan-session arbitration and device status.
        .nest("/scanner", scanner::router())
        // Per-barangay notifications.
        .nest("/notifications", notifications::router())
        // Audit trail (MSWD/DSWD oversight).
        .nest("/audit-logs", audit::router())
        // External agency pension tables.
        .nest("/pension-records", pension::router())
}
