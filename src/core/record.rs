//! Generic key-value view over dataset records
//!
//! Records stay loosely shaped (`serde_json::Value` objects) all the way
//! through the filter/sort/paginate pipeline; they are only deserialized
//! into typed entities at the response-shaping boundary. The helpers here
//! keep the core entity-agnostic.

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// One entity instance, as loaded from the dataset document.
///
/// Always a JSON object in practice; the core never mutates a stored record.
pub type Record = Value;

/// A primary-key value extracted from a record field.
///
/// Entity keys in the dataset are either integers (procurement ids) or
/// strings (sales-order and customer ids), so the index key is a small enum
/// rather than a stringly-typed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Int(i64),
    Str(String),
}

impl RecordKey {
    /// Extract a key from a JSON value, if it is a usable key type.
    pub fn from_value(value: &Value) -> Option<RecordKey> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordKey::Int),
            Value::String(s) => Some(RecordKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(i) => write!(f, "{}", i),
            RecordKey::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        RecordKey::Int(value)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        RecordKey::Str(value.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        RecordKey::Str(value)
    }
}

/// Get a field from a record. Field names are case-sensitive.
pub fn field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    record.as_object().and_then(|obj| obj.get(name))
}

/// Extract the primary key of a record from the given key field.
pub fn key_of(record: &Record, key_field: &str) -> Option<RecordKey> {
    field(record, key_field).and_then(RecordKey::from_value)
}

/// Total order over field values used for sorting.
///
/// Missing and null values sort lowest so a sort on a sparse field never
/// fails. Across kinds the order is null < bool < number < string, which
/// keeps the sort total even on mixed-type columns.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (x, y) => rank(x).cmp(&rank(y)),
    }
}
