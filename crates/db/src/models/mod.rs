//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod audit;
pub mod notification;
pub mod pension;
pub mod rfid_binding;
pub mod scanner;
pub mod senior;
pub mod session;
pub mod user;
