//! # Memberboard Core
//!
//! Domain layer for the memberboard backend: the member record, the
//! repository interface it travels through, and the error taxonomy shared by
//! the data-access stack.

pub mod domain;
pub mod errors;
pub mod repositories;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
