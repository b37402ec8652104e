//! Error types shared by the data-access stack

pub mod types;

pub use types::DataAccessError;
