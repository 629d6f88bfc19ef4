//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-table writes
//! (bind, unbind, claim, photo sync) run inside a single transaction.

pub mod audit_repo;
pub mod eligible_name_repo;
pub mod notification_repo;
pub mod pension_record_repo;
pub mod rfid_binding_repo;
pub mod scan_session_repo;
pub mod scanner_repo;
pub mod senior_repo;
pub mod session_repo;
pub mod user_repo;

pub use audit_repo::AuditLogRepo;
pub use eligible_name_repo::EligibleNameRepo;
pub use notification_repo::NotificationRepo;
pub use pension_record_repo::PensionRecordRepo;
pub use rfid_binding_repo::RfidBindingRepo;
pub use scan_session_repo::ScanSessionRepo;
pub use scanner_repo::ScannerRepo;
pub use senior_repo::SeniorRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
