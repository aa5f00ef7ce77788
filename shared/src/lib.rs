//! MyDiet Shared Library
//!
//! This crate contains the DTO types exposed at the API boundary and the
//! input validation helpers used by the backend.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
