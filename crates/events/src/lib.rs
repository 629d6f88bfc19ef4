//! Lingap event bus and audit-trail infrastructure.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PlatformEvent`]: the canonical domain event envelope.
//! - [`AuditTrail`]: background service that writes workflow events to
//!   the per-barangay `audit_logs` table. Workflows publish and move
//!   on; persistence happens off the request path.

pub mod audit_trail;
pub mod bus;

pub use audit_trail::AuditTrail;
pub use bus::{EventBus, PlatformEvent};
