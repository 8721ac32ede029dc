//! Records and collections.
//!
//! A `Record` is an open field-to-value mapping; records in one collection are
//! assumed (not enforced) to share a compatible field set, and every operation
//! tolerates absent fields. A `Collection` is an ordered `Vec<Record>`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One element of a collection: an open field-to-value mapping.
///
/// Equality is value equality over the full field set; this is the membership
/// notion the `or`/`and` combinators de-duplicate with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

/// An ordered sequence of records. Order is meaningful: sort and limit
/// depend on it.
pub type Collection = Vec<Record>;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literals in callers and tests.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Explicit "has key" query; absent fields are never an error.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build a record from a JSON object. Non-object values are rejected.
    pub fn from_json(json: serde_json::Value) -> crate::error::Result<Self> {
        match Value::from(json) {
            Value::Map(fields) => Ok(Self { fields }),
            other => Err(crate::error::Error::InvalidArgument(format!(
                "expected a JSON object for a record, got {other:?}"
            ))),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
