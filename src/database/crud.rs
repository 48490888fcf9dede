use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

/// A table row type the generic queries below can read and write.
pub trait Entity: Sized {
    type Payload: EntityPayload;
    type Filter: RecordFilter + Default;

    const TABLE: &'static str;
    /// Reads through the API only ever see rows in this scope.
    const READ_SCOPE: Scope;

    /// Columns written by insert and update, in `EntityPayload::sql_values` order.
    fn writable_columns() -> Vec<&'static str>;
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self>;
}

pub trait EntityPayload {
    fn sql_values(&self) -> Vec<Value>;

    /// Called before insert; tables without a client-settable flag ignore it.
    fn mark_active(&mut self) {}
}

pub trait RecordFilter {
    fn conditions(&self) -> Vec<Condition>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Active,
    All,
}

impl Scope {
    fn clause(self) -> Option<&'static str> {
        match self {
            Scope::Active => Some("is_active = 1"),
            Scope::All => None,
        }
    }
}

/// One `WHERE` term. Placeholders are numbered as values are pushed.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(&'static str, Value),
    /// Case-insensitive substring match against any of the columns.
    Contains(&'static [&'static str], String),
    /// The column holds a JSON array that includes the value.
    JsonArrayContains(&'static str, String),
}

impl Condition {
    pub fn equals(column: &'static str, value: impl Into<String>) -> Self {
        Condition::Equals(column, Value::Text(value.into()))
    }

    fn render(&self, values: &mut Vec<Value>) -> String {
        match self {
            Condition::Equals(column, value) => {
                values.push(value.clone());
                format!("{column} = ?{}", values.len())
            }
            Condition::Contains(columns, needle) => {
                values.push(Value::Text(format!("%{}%", needle.to_lowercase())));
                let idx = values.len();
                let terms: Vec<String> = columns
                    .iter()
                    .map(|column| format!("LOWER({column}) LIKE ?{idx}"))
                    .collect();
                format!("({})", terms.join(" OR "))
            }
            Condition::JsonArrayContains(column, item) => {
                values.push(Value::Text(item.clone()));
                format!(
                    "EXISTS (SELECT 1 FROM json_each({column}) WHERE json_each.value = ?{})",
                    values.len()
                )
            }
        }
    }
}

pub fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub fn optional_text(value: &Option<String>) -> Value {
    value.clone().map(Value::Text).unwrap_or(Value::Null)
}

fn select_list<E: Entity>() -> String {
    let mut columns = vec!["id"];
    columns.extend(E::writable_columns());
    columns.extend(["is_active", "created_at", "updated_at"]);
    columns.join(", ")
}

fn where_clause(conditions: &[Condition], scope: Scope, values: &mut Vec<Value>) -> String {
    let mut clauses: Vec<String> = scope.clause().map(str::to_string).into_iter().collect();
    clauses.extend(conditions.iter().map(|condition| condition.render(values)));

    if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    }
}

pub fn insert<E: Entity>(conn: &Connection, payload: &E::Payload) -> Result<E> {
    let columns = E::writable_columns();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        E::TABLE,
        columns.join(", "),
        placeholders.join(", "),
        select_list::<E>()
    );

    conn.query_row(&sql, params_from_iter(payload.sql_values()), E::from_row)
        .with_context(|| format!("Failed to insert into {}", E::TABLE))
}

/// Replaces every writable column. `None` when no row in `scope` has `id`.
pub fn update<E: Entity>(
    conn: &Connection,
    id: i64,
    payload: &E::Payload,
    scope: Scope,
) -> Result<Option<E>> {
    let columns = E::writable_columns();
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect();

    let mut values = payload.sql_values();
    values.push(Value::Integer(id));
    let id_placeholder = values.len();
    let scope_clause = scope
        .clause()
        .map(|clause| format!(" AND {clause}"))
        .unwrap_or_default();

    let sql = format!(
        "UPDATE {} SET {}, updated_at = CURRENT_TIMESTAMP WHERE id = ?{}{} RETURNING {}",
        E::TABLE,
        assignments.join(", "),
        id_placeholder,
        scope_clause,
        select_list::<E>()
    );

    conn.query_row(&sql, params_from_iter(values), E::from_row)
        .optional()
        .with_context(|| format!("Failed to update {}", E::TABLE))
}

pub fn find_by_id<E: Entity>(conn: &Connection, id: i64, scope: Scope) -> Result<Option<E>> {
    let mut values = Vec::new();
    let filter = where_clause(&[Condition::Equals("id", Value::Integer(id))], scope, &mut values);
    let sql = format!("SELECT {} FROM {}{}", select_list::<E>(), E::TABLE, filter);

    conn.query_row(&sql, params_from_iter(values), E::from_row)
        .optional()
        .with_context(|| format!("Failed to query {} by id", E::TABLE))
}

/// Rows matching every condition, in insertion order.
pub fn list<E: Entity>(conn: &Connection, conditions: &[Condition], scope: Scope) -> Result<Vec<E>> {
    let mut values = Vec::new();
    let filter = where_clause(conditions, scope, &mut values);
    let sql = format!(
        "SELECT {} FROM {}{} ORDER BY id",
        select_list::<E>(),
        E::TABLE,
        filter
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), E::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list {}", E::TABLE))?;

    Ok(rows)
}

/// Clears the active flag. Returns whether the row exists.
pub fn deactivate<E: Entity>(conn: &Connection, id: i64) -> Result<bool> {
    let sql = format!(
        "UPDATE {} SET is_active = 0, updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
        E::TABLE
    );
    let changed = conn
        .execute(&sql, params![id])
        .with_context(|| format!("Failed to soft delete from {}", E::TABLE))?;

    Ok(changed > 0)
}

pub fn delete_permanently<E: Entity>(conn: &Connection, id: i64) -> Result<bool> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", E::TABLE);
    let changed = conn
        .execute(&sql, params![id])
        .with_context(|| format!("Failed to delete from {}", E::TABLE))?;

    Ok(changed > 0)
}
