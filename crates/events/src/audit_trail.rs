//! Durable audit-trail service.
//!
//! [`AuditTrail`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! broadcast channel and writes every event carrying an
//! [`AuditOutcome`](crate::bus::AuditOutcome) to the `audit_logs`
//! table. It runs as a long-lived background task and shuts down
//! gracefully when the bus sender is dropped.

use tokio::sync::broadcast;
use lingap_core::types::DbId;
use lingap_db::models::audit::CreateAuditLog;
use lingap_db::repositories::AuditLogRepo;
use lingap_db::DbPool;

use crate::bus::PlatformEvent;

/// Barangay recorded when an audited event carries no barangay scope.
const UNSCOPED_BARANGAY: &str = "System";

/// Background service that persists audited workflow events.
pub struct AuditTrail;

impl AuditTrail {
    /// Run the audit loop.
    ///
    /// Subscribes to the event bus via the provided `receiver` and
    /// appends an `audit_logs` row for every event with an outcome.
    /// Events without an outcome are broadcast-only and skipped. The
    /// loop exits when the channel is closed (i.e. the
    /// [`EventBus`](crate::bus::EventBus) is dropped).
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if event.outcome.is_none() {
                        continue;
                    }
                    if let Err(e) = Self::persist(&pool, &event).await {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            "Failed to append audit entry"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Audit trail lagged, some events were not recorded"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, audit trail shutting down");
                    break;
                }
            }
        }
    }

    /// Write a single audited event to the `audit_logs` table.
    async fn persist(pool: &DbPool, event: &PlatformEvent) -> Result<DbId, sqlx::Error> {
        let outcome = match &event.outcome {
            Some(outcome) => outcome,
            None => return Err(sqlx::Error::RowNotFound),
        };

        let entry = CreateAuditLog {
            barangay: event
                .barangay
                .clone()
                .unwrap_or_else(|| UNSCOPED_BARANGAY.to_string()),
            action: event.event_type.clone(),
            status: outcome.status.clone(),
            message: outcome.message.clone(),
            performed_by: event.actor_user_id,
        };
        AuditLogRepo::create(pool, &entry).await
    }
}
