//! Data-access error taxonomy
//!
//! Startup errors (configuration, mapping parse, alias resolution) abort
//! process initialization; per-call errors propagate unchanged to the caller,
//! which decides on retry, log, or abort. No internal retry logic exists.
//! Driver causes are carried as formatted strings so this crate stays free of
//! database dependencies.

use thiserror::Error;

/// Errors surfaced by the connection pool, mapping layer, and session template
#[derive(Error, Debug)]
pub enum DataAccessError {
    /// Missing or invalid settings; fatal, prevents startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The database is unreachable or a connection failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// No pooled connection became available within the acquire timeout
    #[error("Connection pool exhausted after {timeout_secs}s")]
    PoolExhausted { timeout_secs: u64 },

    /// The pool has been shut down
    #[error("Connection pool is closed")]
    PoolClosed,

    /// A mapper document could not be read or parsed
    #[error("Failed to parse mapping definition: {detail}")]
    MappingParse { detail: String },

    /// A statement references a type alias that was never registered
    #[error("Unresolved type alias `{alias}` in statement `{statement}`")]
    AliasResolution { alias: String, statement: String },

    /// No mapping definition exists for the statement id
    #[error("No statement mapped for id `{statement}`")]
    StatementNotFound { statement: String },

    /// A placeholder could not be bound from the parameter object
    #[error("Cannot bind parameter `{field}` for statement `{statement}`")]
    ParameterBinding { statement: String, field: String },

    /// The database rejected the statement; the driver cause is attached
    #[error("Statement `{statement}` failed: {message}")]
    SqlExecution { statement: String, message: String },

    /// A result row could not be mapped into the declared result type
    #[error("Cannot map result row for statement `{statement}`: {message}")]
    ResultMapping { statement: String, message: String },
}

impl From<mb_shared::config::ConfigError> for DataAccessError {
    fn from(err: mb_shared::config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_shared::config::ConfigError;

    #[test]
    fn test_config_error_converts_to_configuration() {
        let err: DataAccessError = ConfigError::MissingSetting {
            key: "database.url".to_string(),
        }
        .into();
        assert!(matches!(err, DataAccessError::Configuration(_)));
    }

    #[test]
    fn test_error_messages_name_the_statement() {
        let err = DataAccessError::StatementNotFound {
            statement: "MemberMapper.insertMember".to_string(),
        };
        assert!(err.to_string().contains("MemberMapper.insertMember"));
    }
}
