//! Database module - connection pool, SQL mapping layer, and typed mappers

pub mod connection;
pub mod mappers;
pub mod mapping;
pub mod session;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mappers::SqlMemberMapper;
pub use mapping::{MappedStatement, MappingFactory, StatementKind, TypeAliasRegistry};
pub use session::SessionTemplate;
