//! Mapped statement model and `#{}` template parsing

use serde::Deserialize;

use mb_core::errors::DataAccessError;

/// Category of a mapped statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Insert,
    Select,
    Update,
    Delete,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatementKind::Insert => "insert",
            StatementKind::Select => "select",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A single executable statement parsed from a mapper document
///
/// The SQL already has every `#{field}` placeholder rewritten to `?`;
/// `parameters` lists the field names in bind order.
#[derive(Debug, Clone)]
pub struct MappedStatement {
    /// Qualified statement id (`<namespace>.<name>`)
    pub id: String,
    /// Statement category
    pub kind: StatementKind,
    /// SQL with positional placeholders
    pub sql: String,
    /// Placeholder field names in bind order
    pub parameters: Vec<String>,
    /// Declared parameter type alias
    pub parameter_type: Option<String>,
    /// Declared result type alias
    pub result_type: Option<String>,
}

impl MappedStatement {
    /// Parse a `#{field}` template into positional SQL plus the ordered
    /// placeholder names
    pub fn parse(
        id: impl Into<String>,
        kind: StatementKind,
        template: &str,
        parameter_type: Option<String>,
        result_type: Option<String>,
    ) -> Result<Self, DataAccessError> {
        let id = id.into();
        let (sql, parameters) = parse_template(&id, template)?;
        Ok(Self {
            id,
            kind,
            sql,
            parameters,
            parameter_type,
            result_type,
        })
    }
}

fn parse_template(id: &str, template: &str) -> Result<(String, Vec<String>), DataAccessError> {
    let mut sql = String::with_capacity(template.len());
    let mut parameters = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("#{") {
        sql.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| DataAccessError::MappingParse {
            detail: format!("unterminated #{{...}} placeholder in statement `{}`", id),
        })?;
        let name = after[..end].trim();
        if name.is_empty() {
            return Err(DataAccessError::MappingParse {
                detail: format!("empty #{{...}} placeholder in statement `{}`", id),
            });
        }
        parameters.push(name.to_string());
        sql.push('?');
        rest = &after[end + 1..];
    }
    sql.push_str(rest);

    Ok((sql, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert_template() {
        let statement = MappedStatement::parse(
            "MemberMapper.insertMember",
            StatementKind::Insert,
            "INSERT INTO member (name, id, phone) VALUES (#{name}, #{id}, #{phone})",
            Some("Member".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(
            statement.sql,
            "INSERT INTO member (name, id, phone) VALUES (?, ?, ?)"
        );
        assert_eq!(statement.parameters, vec!["name", "id", "phone"]);
    }

    #[test]
    fn test_parse_preserves_placeholder_order() {
        let statement = MappedStatement::parse(
            "MemberMapper.updateMember",
            StatementKind::Update,
            "UPDATE member SET name = #{name}, phone = #{phone} WHERE id = #{id}",
            None,
            None,
        )
        .unwrap();

        assert_eq!(statement.parameters, vec!["name", "phone", "id"]);
    }

    #[test]
    fn test_parse_trims_placeholder_whitespace() {
        let statement = MappedStatement::parse(
            "m.s",
            StatementKind::Select,
            "SELECT * FROM member WHERE id = #{ id }",
            None,
            None,
        )
        .unwrap();

        assert_eq!(statement.parameters, vec!["id"]);
        assert_eq!(statement.sql, "SELECT * FROM member WHERE id = ?");
    }

    #[test]
    fn test_repeated_placeholders_bind_twice() {
        let statement = MappedStatement::parse(
            "m.s",
            StatementKind::Select,
            "SELECT * FROM member WHERE id = #{id} OR name = #{id}",
            None,
            None,
        )
        .unwrap();

        assert_eq!(statement.parameters, vec!["id", "id"]);
    }

    #[test]
    fn test_template_without_placeholders() {
        let statement = MappedStatement::parse(
            "MemberMapper.selectAllMembers",
            StatementKind::Select,
            "SELECT name, id, phone FROM member",
            None,
            Some("Member".to_string()),
        )
        .unwrap();

        assert!(statement.parameters.is_empty());
        assert_eq!(statement.sql, "SELECT name, id, phone FROM member");
    }

    #[test]
    fn test_unterminated_placeholder_fails() {
        let result = MappedStatement::parse(
            "m.s",
            StatementKind::Select,
            "SELECT * FROM member WHERE id = #{id",
            None,
            None,
        );

        assert!(matches!(
            result,
            Err(DataAccessError::MappingParse { .. })
        ));
    }

    #[test]
    fn test_empty_placeholder_fails() {
        let result = MappedStatement::parse(
            "m.s",
            StatementKind::Select,
            "SELECT * FROM member WHERE id = #{}",
            None,
            None,
        );

        assert!(matches!(
            result,
            Err(DataAccessError::MappingParse { .. })
        ));
    }
}
