//! # Infrastructure Layer
//!
//! Database-connectivity bootstrap for the memberboard backend. The crate
//! builds each component in dependency order at startup:
//!
//! configuration → connection pool → mapping factory → session template →
//! typed mappers
//!
//! and hands the result back as a [`DataServices`] container shared by
//! reference for the process lifetime. [`DataServices::shutdown`] closes the
//! pool exactly once at the end of it.

use std::sync::Arc;

use mb_core::domain::entities::member::Member;
use mb_core::errors::DataAccessError;
use mb_shared::config::AppConfig;

pub mod database;

pub use database::connection::{DatabasePool, PoolStatistics};
pub use database::mappers::SqlMemberMapper;
pub use database::mapping::{MappingFactory, TypeAliasRegistry};
pub use database::session::SessionTemplate;

/// Container for the data-access services built at startup
#[derive(Clone)]
pub struct DataServices {
    /// Shared connection pool
    pub pool: DatabasePool,
    /// Shared statement-execution façade
    pub session: SessionTemplate,
    /// Typed mapper over the member statements
    pub members: Arc<SqlMemberMapper>,
}

impl DataServices {
    /// Close the connection pool. Call once during shutdown.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

/// Initialize the data-access services from the environment
///
/// Loads `.env` if present, then the application configuration, and builds
/// every component. Configuration and mapping errors abort initialization;
/// so does an unreachable database.
pub async fn initialize() -> Result<DataServices, DataAccessError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let config = AppConfig::load()?;
    initialize_with(config).await
}

/// Initialize the data-access services from an explicit configuration
pub async fn initialize_with(config: AppConfig) -> Result<DataServices, DataAccessError> {
    tracing::info!("Initializing data-access services");

    let pool = DatabasePool::new(config.database).await?;

    // The pool connects lazily; probe it so an unreachable database fails
    // startup instead of the first statement.
    pool.ensure_healthy().await?;

    let mut aliases = TypeAliasRegistry::for_namespace(&config.mapper.type_alias_namespace);
    aliases.register::<Member>("Member");

    let factory = MappingFactory::build(pool.clone(), &config.mapper, aliases)?;
    let session = SessionTemplate::new(Arc::new(factory));
    let members = Arc::new(SqlMemberMapper::new(session.clone()));

    tracing::info!("Data-access services initialized");

    Ok(DataServices {
        pool,
        session,
        members,
    })
}
