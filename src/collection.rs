//! Dynamic values and collection classification.
//!
//! `Value` models the loosely-typed payloads handed around by front-end code:
//! beyond what JSON can carry it distinguishes `undefined` from `null`, keeps
//! non-finite numbers and has unique symbol tokens.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// A unique token. Two symbols compare equal only if one is a copy of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u64);

impl Symbol {
    pub fn new() -> Self {
        Symbol(NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// A value holding a fresh [`Symbol`].
    pub fn symbol() -> Self {
        Value::Symbol(Symbol::new())
    }

    pub fn empty_array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn empty_object() -> Self {
        Value::Object(BTreeMap::new())
    }

    pub fn is_collection(&self) -> bool {
        is_collection(self)
    }
}

/// `true` for sequences and keyed mappings (empty ones included), `false`
/// for everything else.
pub fn is_collection(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
