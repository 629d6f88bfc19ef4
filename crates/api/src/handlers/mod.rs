//! HTTP handlers grouped by resource.

use lingap_core::types::DbId;
use lingap_db::models::audit::{AUDIT_STATUS_ERROR, AUDIT_STATUS_SUCCESS};
use lingap_db::models::notification::CreateNotification;
use lingap_db::repositories::NotificationRepo;
use lingap_events::PlatformEvent;

use crate::state::AppState;

pub mod admin;
pub mod audit;
pub mod auth;
pub mod bindings;
pub mod masterlist;
pub mod notifications;
pub mod pension;
pub mod scanner;
pub mod seniors;

/// Record the outcome of a workflow step for a barangay.
///
/// Writes the notification row synchronously (the portals poll for
/// these) and publishes the audited event to the bus; the audit row
/// itself lands off the request path via the audit trail task.
pub(crate) async fn record_outcome(
    state: &AppState,
    event_type: &str,
    barangay: &str,
    actor: Option<DbId>,
    source: Option<(&str, DbId)>,
    success: bool,
    message: &str,
) -> Result<(), sqlx::Error> {
    let kind = if success { "success" } else { "error" };
    let notification = CreateNotification {
        barangay: barangay.to_string(),
        message: message.to_string(),
        kind: kind.to_string(),
    };
    NotificationRepo::create(&state.pool, &notification).await?;

    let status = if success {
        AUDIT_STATUS_SUCCESS
    } else {
        AUDIT_STATUS_ERROR
    };
    let mut event = PlatformEvent::new(event_type)
        .with_barangay(barangay)
        .with_outcome(status, message);
    if let Some(actor) = actor {
        event = event.with_actor(actor);
    }
    if let Some((entity_type, entity_id)) = source {
        event = event.with_source(entity_type, entity_id);
    }
    state.event_bus.publish(event);
    Ok(())
}
