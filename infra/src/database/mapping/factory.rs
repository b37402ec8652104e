//! Mapping factory
//!
//! Builds the immutable statement dispatch table: discovers mapper documents,
//! parses every statement, and resolves every declared type alias. This is
//! the one place declarative configuration becomes executable dispatch;
//! everything downstream is a read-only lookup.

use std::collections::HashMap;

use mb_core::errors::DataAccessError;
use mb_shared::config::MapperConfig;

use super::alias::TypeAliasRegistry;
use super::loader::{self, MapperDocument};
use super::statement::MappedStatement;
use crate::database::connection::DatabasePool;

/// Immutable factory binding the pool to the parsed mapping definitions
pub struct MappingFactory {
    pool: DatabasePool,
    statements: HashMap<String, MappedStatement>,
    aliases: TypeAliasRegistry,
}

impl MappingFactory {
    /// Discover, parse, and validate every mapping definition
    ///
    /// # Arguments
    /// * `pool` - the connection pool statements execute against
    /// * `config` - mapper locations and alias namespace
    /// * `aliases` - registry the statement type aliases must resolve in
    ///
    /// Fails with `MappingParse` on malformed documents or duplicate ids and
    /// with `AliasResolution` when a statement references an unregistered
    /// alias.
    pub fn build(
        pool: DatabasePool,
        config: &MapperConfig,
        aliases: TypeAliasRegistry,
    ) -> Result<Self, DataAccessError> {
        config.validate()?;

        let paths = loader::discover(&config.locations)?;
        tracing::info!(
            "Loading {} mapper document(s) from `{}`",
            paths.len(),
            config.locations
        );

        let mut documents = Vec::with_capacity(paths.len());
        for path in &paths {
            documents.push(MapperDocument::from_path(path)?);
        }

        Self::from_documents(pool, documents, aliases)
    }

    /// Build a factory from already-parsed documents
    ///
    /// Used by tests and callers that assemble mapper documents in code.
    pub fn from_documents(
        pool: DatabasePool,
        documents: Vec<MapperDocument>,
        aliases: TypeAliasRegistry,
    ) -> Result<Self, DataAccessError> {
        let mut statements: HashMap<String, MappedStatement> = HashMap::new();

        for document in documents {
            for statement in document.into_statements()? {
                if statements.contains_key(&statement.id) {
                    return Err(DataAccessError::MappingParse {
                        detail: format!("duplicate statement id `{}`", statement.id),
                    });
                }
                tracing::debug!("Registered statement `{}`", statement.id);
                statements.insert(statement.id.clone(), statement);
            }
        }

        let factory = Self {
            pool,
            statements,
            aliases,
        };
        factory.resolve_aliases()?;
        Ok(factory)
    }

    // Every alias referenced by a statement must already be registered;
    // checked once here so per-call lookups never fail on aliases.
    fn resolve_aliases(&self) -> Result<(), DataAccessError> {
        for statement in self.statements.values() {
            for alias in [&statement.parameter_type, &statement.result_type]
                .into_iter()
                .flatten()
            {
                if !self.aliases.contains(alias) {
                    return Err(DataAccessError::AliasResolution {
                        alias: alias.clone(),
                        statement: statement.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a statement by qualified id
    pub fn statement(&self, id: &str) -> Result<&MappedStatement, DataAccessError> {
        self.statements
            .get(id)
            .ok_or_else(|| DataAccessError::StatementNotFound {
                statement: id.to_string(),
            })
    }

    /// The pool statements execute against
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// The registry the statement aliases resolved in
    pub fn aliases(&self) -> &TypeAliasRegistry {
        &self.aliases
    }

    /// Iterate over every registered statement id
    pub fn statement_ids(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }
}
