//! Mapper document discovery and parsing
//!
//! Mapper documents are TOML files, one per logical entity, found through the
//! configured location glob. Each document declares a namespace and a table
//! of named statements; statement ids are qualified as
//! `<namespace>.<statement name>`, which is also the convention the typed
//! mapper interfaces dispatch by.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use mb_core::errors::DataAccessError;

use super::statement::{MappedStatement, StatementKind};

/// On-disk schema of one mapper document
#[derive(Debug, Deserialize)]
pub struct MapperDocument {
    /// Qualifier prepended to every statement name
    pub namespace: String,
    /// Statement name → definition
    pub statements: BTreeMap<String, StatementDefinition>,
}

/// One statement entry in a mapper document
#[derive(Debug, Deserialize)]
pub struct StatementDefinition {
    /// Statement category
    pub kind: StatementKind,
    /// SQL template with `#{field}` placeholders
    pub sql: String,
    /// Parameter type alias
    #[serde(default)]
    pub parameter_type: Option<String>,
    /// Result type alias
    #[serde(default)]
    pub result_type: Option<String>,
}

impl MapperDocument {
    /// Parse a mapper document from TOML text
    ///
    /// `origin` names the source in error messages.
    pub fn from_toml(source: &str, origin: &str) -> Result<Self, DataAccessError> {
        let document: MapperDocument =
            toml::from_str(source).map_err(|e| DataAccessError::MappingParse {
                detail: format!("{}: {}", origin, e),
            })?;

        if document.namespace.trim().is_empty() {
            return Err(DataAccessError::MappingParse {
                detail: format!("{}: mapper namespace must not be empty", origin),
            });
        }

        Ok(document)
    }

    /// Read and parse a mapper document from disk
    pub fn from_path(path: &Path) -> Result<Self, DataAccessError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| DataAccessError::MappingParse {
                detail: format!("{}: {}", path.display(), e),
            })?;
        Self::from_toml(&source, &path.display().to_string())
    }

    /// Parse every statement into its executable form, qualifying ids with
    /// the document namespace
    pub fn into_statements(self) -> Result<Vec<MappedStatement>, DataAccessError> {
        let mut statements = Vec::with_capacity(self.statements.len());
        for (name, definition) in self.statements {
            let id = format!("{}.{}", self.namespace, name);
            statements.push(MappedStatement::parse(
                id,
                definition.kind,
                &definition.sql,
                definition.parameter_type,
                definition.result_type,
            )?);
        }
        Ok(statements)
    }
}

/// Expand a location glob into the matching mapper document paths
pub fn discover(locations: &str) -> Result<Vec<PathBuf>, DataAccessError> {
    let entries = glob::glob(locations).map_err(|e| DataAccessError::MappingParse {
        detail: format!("invalid mapper location pattern `{}`: {}", locations, e),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DataAccessError::MappingParse {
            detail: format!("cannot read mapper location: {}", e),
        })?;
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBER_MAPPER: &str = r#"
namespace = "MemberMapper"

[statements.insertMember]
kind = "insert"
parameter_type = "Member"
sql = "INSERT INTO member (name, id, phone) VALUES (#{name}, #{id}, #{phone})"

[statements.selectMemberById]
kind = "select"
parameter_type = "string"
result_type = "Member"
sql = "SELECT name, id, phone FROM member WHERE id = #{id}"
"#;

    #[test]
    fn test_parse_mapper_document() {
        let document = MapperDocument::from_toml(MEMBER_MAPPER, "member_mapper.toml").unwrap();
        assert_eq!(document.namespace, "MemberMapper");
        assert_eq!(document.statements.len(), 2);

        let insert = &document.statements["insertMember"];
        assert_eq!(insert.kind, StatementKind::Insert);
        assert_eq!(insert.parameter_type.as_deref(), Some("Member"));
    }

    #[test]
    fn test_statement_ids_are_namespace_qualified() {
        let document = MapperDocument::from_toml(MEMBER_MAPPER, "member_mapper.toml").unwrap();
        let statements = document.into_statements().unwrap();

        let ids: Vec<&str> = statements.iter().map(|s| s.id.as_str()).collect();
        assert!(ids.contains(&"MemberMapper.insertMember"));
        assert!(ids.contains(&"MemberMapper.selectMemberById"));
    }

    #[test]
    fn test_malformed_document_fails_with_origin() {
        let result = MapperDocument::from_toml("namespace = [", "broken.toml");
        match result {
            Err(DataAccessError::MappingParse { detail }) => {
                assert!(detail.contains("broken.toml"));
            }
            other => panic!("expected MappingParse, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_namespace_fails() {
        let source = r#"
namespace = ""

[statements.noop]
kind = "select"
sql = "SELECT 1"
"#;
        assert!(MapperDocument::from_toml(source, "empty.toml").is_err());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let source = r#"
namespace = "MemberMapper"

[statements.merge]
kind = "merge"
sql = "SELECT 1"
"#;
        assert!(MapperDocument::from_toml(source, "bad_kind.toml").is_err());
    }

    #[test]
    fn test_discover_rejects_invalid_pattern() {
        assert!(matches!(
            discover("mappers/***"),
            Err(DataAccessError::MappingParse { .. })
        ));
    }

    // The shipped mapper documents live under the crate root, which is the
    // working directory for unit tests.
    #[test]
    fn test_discover_finds_shipped_mappers() {
        let paths = discover("mappers/*_mapper.toml").unwrap();
        assert!(!paths.is_empty());
    }
}
