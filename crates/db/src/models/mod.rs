//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full overwrites

pub mod department;
pub mod employee;
pub mod membership;
pub mod project;
pub mod question;
pub mod user;
