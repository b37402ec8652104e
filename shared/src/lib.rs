//! Shared configuration types for the memberboard server
//!
//! This crate provides the externally-supplied settings used across the
//! server modules:
//! - Database connection and pool configuration
//! - Mapper discovery configuration
//! - Configuration loading and validation errors

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, DatabaseConfig, MapperConfig};
