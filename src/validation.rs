//! Request-body validation against an entity allow-list.
//!
//! Create requests must carry every required field with a non-empty value.
//! Update requests are filtered down to allow-listed, non-null fields. Both
//! paths produce a `FieldSet` whose column names are the `&'static str`
//! entries of the allow-list, never the caller's keys.

use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value};

use crate::models::EntityDef;

/// Free-form JSON object as received from a client.
pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),
    #[error("No valid fields to update")]
    NoValidFields,
    #[error("Invalid value for field '{0}'")]
    InvalidValue(&'static str),
}

/// Allow-listed columns and their bound values, as two parallel sequences.
///
/// Only the validators in this module construct a `FieldSet`, so a set is
/// never empty and its columns always belong to `table`'s allow-list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
}

impl FieldSet {
    fn new(def: &EntityDef) -> Self {
        Self {
            table: def.table,
            columns: Vec::with_capacity(def.fields.len()),
            values: Vec::with_capacity(def.fields.len()),
        }
    }

    /// Table whose allow-list produced this set.
    pub fn table(&self) -> &'static str {
        self.table
    }

    fn push(&mut self, column: &'static str, value: SqlValue) {
        self.columns.push(column);
        self.values.push(value);
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Value bound to `column`, if the column is part of the set.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .map(|i| &self.values[i])
    }
}

/// Parse a request body into a JSON object.
///
/// Anything that is not a JSON object (empty body, malformed JSON, arrays,
/// scalars) yields an empty object, which then fails validation with 400.
pub fn parse_body(body: &[u8]) -> Fields {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Validate a create request.
///
/// Returns every allow-listed column in insert order; optional columns the
/// caller left out are bound as NULL.
pub fn validate_create(def: &EntityDef, input: &Fields) -> Result<FieldSet, ValidationError> {
    let missing: Vec<&'static str> = def
        .required
        .iter()
        .copied()
        .filter(|field| input.get(*field).map_or(true, is_blank))
        .collect();

    if !missing.is_empty() {
        tracing::debug!(entity = def.label, ?missing, "Create rejected");
        return Err(ValidationError::MissingFields(missing));
    }

    let mut set = FieldSet::new(def);
    for &column in def.fields {
        let value = match input.get(column) {
            Some(v) => to_sql(column, v)?,
            None => SqlValue::Null,
        };
        set.push(column, value);
    }
    Ok(set)
}

/// Validate a partial update.
///
/// Keeps allow-listed keys whose value is not null, in allow-list order.
/// Unknown keys are dropped silently.
pub fn validate_update(def: &EntityDef, input: &Fields) -> Result<FieldSet, ValidationError> {
    let mut set = FieldSet::new(def);
    for &column in def.fields {
        match input.get(column) {
            None | Some(Value::Null) => {}
            Some(v) => set.push(column, to_sql(column, v)?),
        }
    }

    if set.is_empty() {
        tracing::debug!(entity = def.label, "Update rejected: no valid fields");
        return Err(ValidationError::NoValidFields);
    }
    Ok(set)
}

/// A value counts as missing when it is JSON-falsy.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn to_sql(column: &'static str, value: &Value) -> Result<SqlValue, ValidationError> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(SqlValue::Real(f))
            } else {
                Err(ValidationError::InvalidValue(column))
            }
        }
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(ValidationError::InvalidValue(column)),
    }
}
