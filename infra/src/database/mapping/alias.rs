//! Type-alias registry
//!
//! Short alias names stand in for concrete Rust types inside mapper
//! documents. Aliases are registered in code for a configured namespace and
//! checked when the mapping factory is built, so an unresolved alias fails
//! startup rather than the first statement that uses it.

use std::collections::HashMap;

/// Registry binding alias names to concrete types
#[derive(Debug, Clone)]
pub struct TypeAliasRegistry {
    namespace: String,
    aliases: HashMap<String, &'static str>,
}

impl TypeAliasRegistry {
    /// Create a registry for the given alias namespace
    ///
    /// The primitive aliases (`string`, `int`, `long`, `float`, `bool`) are
    /// pre-registered.
    pub fn for_namespace(namespace: impl Into<String>) -> Self {
        let mut registry = Self {
            namespace: namespace.into(),
            aliases: HashMap::new(),
        };
        registry.register::<String>("string");
        registry.register::<i32>("int");
        registry.register::<i64>("long");
        registry.register::<f64>("float");
        registry.register::<bool>("bool");
        registry
    }

    /// Bind an alias to the concrete type `T`
    pub fn register<T>(&mut self, alias: impl Into<String>) -> &mut Self {
        self.aliases
            .insert(alias.into(), std::any::type_name::<T>());
        self
    }

    /// Look up the concrete type name behind an alias
    pub fn resolve(&self, alias: &str) -> Option<&'static str> {
        self.aliases.get(alias).copied()
    }

    /// Whether an alias is registered
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    /// The namespace this registry serves
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_aliases_are_preregistered() {
        let registry = TypeAliasRegistry::for_namespace("memberboard.domain");
        for alias in ["string", "int", "long", "float", "bool"] {
            assert!(registry.contains(alias), "missing alias {}", alias);
        }
    }

    #[test]
    fn test_registered_alias_resolves_to_type_name() {
        let mut registry = TypeAliasRegistry::for_namespace("memberboard.domain");
        registry.register::<mb_core::domain::entities::member::Member>("Member");

        let resolved = registry.resolve("Member").unwrap();
        assert!(resolved.ends_with("Member"));
    }

    #[test]
    fn test_unknown_alias_does_not_resolve() {
        let registry = TypeAliasRegistry::for_namespace("memberboard.domain");
        assert!(registry.resolve("Board").is_none());
    }
}
