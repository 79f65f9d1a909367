//! Shared primitives for the Tabula workspace: id/timestamp aliases and the
//! domain error type.

pub mod error;
pub mod types;
