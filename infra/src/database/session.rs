//! Session template
//!
//! Stateless shared façade that executes one mapped statement per call.
//! Every call checks out a pooled connection, binds the parameter object
//! into the statement template, executes, and returns the connection on
//! every exit path (success, binding error, or SQL error). The `*_in`
//! variants run on an explicit transaction begun through the pool instead
//! of acquiring their own connection. All owned state is read-only after
//! the factory is built, so clones can be used concurrently from any task.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, MySqlConnection, Row, Transaction, TypeInfo};

use mb_core::errors::DataAccessError;

use super::mapping::{MappedStatement, MappingFactory, StatementKind};

/// Shared façade executing single statements against the mapping factory
#[derive(Clone)]
pub struct SessionTemplate {
    factory: Arc<MappingFactory>,
}

impl SessionTemplate {
    /// Create a session template over a built mapping factory
    pub fn new(factory: Arc<MappingFactory>) -> Self {
        Self { factory }
    }

    /// Execute an insert statement, returning the number of affected rows
    pub async fn insert<P>(&self, id: &str, parameter: &P) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        self.execute(StatementKind::Insert, id, parameter).await
    }

    /// Execute an update statement, returning the number of affected rows
    pub async fn update<P>(&self, id: &str, parameter: &P) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        self.execute(StatementKind::Update, id, parameter).await
    }

    /// Execute a delete statement, returning the number of affected rows
    pub async fn delete<P>(&self, id: &str, parameter: &P) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        self.execute(StatementKind::Delete, id, parameter).await
    }

    /// Execute a select statement expecting at most one row
    pub async fn select_one<P, T>(
        &self,
        id: &str,
        parameter: &P,
    ) -> Result<Option<T>, DataAccessError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let (statement, values) = self.prepare(StatementKind::Select, id, parameter)?;
        let mut conn = self.factory.pool().acquire().await?;
        run_fetch_optional(statement, &values, &mut conn).await
    }

    /// Execute a select statement returning every matching row
    pub async fn select_list<P, T>(
        &self,
        id: &str,
        parameter: &P,
    ) -> Result<Vec<T>, DataAccessError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let (statement, values) = self.prepare(StatementKind::Select, id, parameter)?;
        let mut conn = self.factory.pool().acquire().await?;
        run_fetch_all(statement, &values, &mut conn).await
    }

    /// Execute an insert statement inside an explicit transaction
    ///
    /// The statement runs on the transaction's connection; nothing is
    /// acquired from the pool. Changes become visible to other connections
    /// when the transaction commits.
    pub async fn insert_in<P>(
        &self,
        tx: &mut Transaction<'_, MySql>,
        id: &str,
        parameter: &P,
    ) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        let (statement, values) = self.prepare(StatementKind::Insert, id, parameter)?;
        run_execute(statement, &values, &mut **tx).await
    }

    /// Execute an update statement inside an explicit transaction
    pub async fn update_in<P>(
        &self,
        tx: &mut Transaction<'_, MySql>,
        id: &str,
        parameter: &P,
    ) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        let (statement, values) = self.prepare(StatementKind::Update, id, parameter)?;
        run_execute(statement, &values, &mut **tx).await
    }

    /// Execute a delete statement inside an explicit transaction
    pub async fn delete_in<P>(
        &self,
        tx: &mut Transaction<'_, MySql>,
        id: &str,
        parameter: &P,
    ) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        let (statement, values) = self.prepare(StatementKind::Delete, id, parameter)?;
        run_execute(statement, &values, &mut **tx).await
    }

    /// Execute a select statement inside an explicit transaction, expecting
    /// at most one row
    pub async fn select_one_in<P, T>(
        &self,
        tx: &mut Transaction<'_, MySql>,
        id: &str,
        parameter: &P,
    ) -> Result<Option<T>, DataAccessError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let (statement, values) = self.prepare(StatementKind::Select, id, parameter)?;
        run_fetch_optional(statement, &values, &mut **tx).await
    }

    async fn execute<P>(
        &self,
        kind: StatementKind,
        id: &str,
        parameter: &P,
    ) -> Result<u64, DataAccessError>
    where
        P: Serialize + Sync,
    {
        let (statement, values) = self.prepare(kind, id, parameter)?;
        let mut conn = self.factory.pool().acquire().await?;
        run_execute(statement, &values, &mut conn).await
    }

    // Lookup and binding happen before any connection is acquired, so a
    // programmer error never consumes a pool slot.
    fn prepare<P: Serialize>(
        &self,
        kind: StatementKind,
        id: &str,
        parameter: &P,
    ) -> Result<(&MappedStatement, Vec<Value>), DataAccessError> {
        let statement = self.factory.statement(id)?;
        if statement.kind != kind {
            return Err(DataAccessError::SqlExecution {
                statement: id.to_string(),
                message: format!("statement is mapped as `{}`, not `{}`", statement.kind, kind),
            });
        }
        let values = bind_values(statement, parameter)?;
        Ok((statement, values))
    }
}

async fn run_execute(
    statement: &MappedStatement,
    values: &[Value],
    conn: &mut MySqlConnection,
) -> Result<u64, DataAccessError> {
    tracing::debug!("Executing statement `{}`", statement.id);
    let result = build_query(statement, values)
        .execute(&mut *conn)
        .await
        .map_err(|e| sql_error(&statement.id, e))?;
    Ok(result.rows_affected())
}

async fn run_fetch_optional<T: DeserializeOwned>(
    statement: &MappedStatement,
    values: &[Value],
    conn: &mut MySqlConnection,
) -> Result<Option<T>, DataAccessError> {
    tracing::debug!("Executing statement `{}`", statement.id);
    let row = build_query(statement, values)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| sql_error(&statement.id, e))?;
    row.map(|r| decode_row(&statement.id, &r)).transpose()
}

async fn run_fetch_all<T: DeserializeOwned>(
    statement: &MappedStatement,
    values: &[Value],
    conn: &mut MySqlConnection,
) -> Result<Vec<T>, DataAccessError> {
    tracing::debug!("Executing statement `{}`", statement.id);
    let rows = build_query(statement, values)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| sql_error(&statement.id, e))?;
    rows.iter()
        .map(|row| decode_row(&statement.id, row))
        .collect()
}

/// Serialize the parameter object and pull out each placeholder field in
/// template order
fn bind_values<P: Serialize>(
    statement: &MappedStatement,
    parameter: &P,
) -> Result<Vec<Value>, DataAccessError> {
    if statement.parameters.is_empty() {
        return Ok(Vec::new());
    }

    let object = match serde_json::to_value(parameter) {
        // Named placeholders bind from object fields only; a scalar cannot
        // satisfy them.
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            return Err(DataAccessError::ParameterBinding {
                statement: statement.id.clone(),
                field: statement.parameters[0].clone(),
            })
        }
    };

    let mut values = Vec::with_capacity(statement.parameters.len());
    for name in &statement.parameters {
        match object.get(name) {
            Some(value @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => {
                values.push(value.clone());
            }
            _ => {
                return Err(DataAccessError::ParameterBinding {
                    statement: statement.id.clone(),
                    field: name.clone(),
                })
            }
        }
    }
    Ok(values)
}

fn build_query<'a>(
    statement: &'a MappedStatement,
    values: &'a [Value],
) -> Query<'a, MySql, MySqlArguments> {
    let mut query = sqlx::query(&statement.sql);
    for value in values {
        query = match value {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => query.bind(i),
                None => query.bind(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => query.bind(s.as_str()),
            other => query.bind(other.to_string()),
        };
    }
    query
}

/// Decode a result row column-by-column into a JSON object, then into the
/// declared result type
fn decode_row<T: DeserializeOwned>(id: &str, row: &MySqlRow) -> Result<T, DataAccessError> {
    let mut object = serde_json::Map::with_capacity(row.columns().len());
    for column in row.columns() {
        let value = decode_column(id, row, column.ordinal(), column.type_info().name())?;
        object.insert(column.name().to_string(), value);
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| DataAccessError::ResultMapping {
        statement: id.to_string(),
        message: e.to_string(),
    })
}

fn decode_column(
    id: &str,
    row: &MySqlRow,
    index: usize,
    type_name: &str,
) -> Result<Value, DataAccessError> {
    let map_err = |e: sqlx::Error| DataAccessError::ResultMapping {
        statement: id.to_string(),
        message: format!("column {}: {}", index, e),
    };

    let value = match type_name {
        "BOOLEAN" | "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .map_err(map_err)?
            .map_or(Value::Null, Value::from),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)
            .map_err(map_err)?
            .map_or(Value::Null, Value::from),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<Option<u64>, _>(index)
            .map_err(map_err)?
            .map_or(Value::Null, Value::from),
        "FLOAT" | "DOUBLE" => row
            .try_get::<Option<f64>, _>(index)
            .map_err(map_err)?
            .map_or(Value::Null, Value::from),
        // CHAR, VARCHAR, TEXT, DECIMAL, date/time types and the rest decode
        // through their string representation
        _ => row
            .try_get::<Option<String>, _>(index)
            .map_err(map_err)?
            .map_or(Value::Null, Value::from),
    };
    Ok(value)
}

fn sql_error(id: &str, error: sqlx::Error) -> DataAccessError {
    tracing::error!("Statement `{}` failed: {}", id, error);
    DataAccessError::SqlExecution {
        statement: id.to_string(),
        message: error.to_string(),
    }
}
