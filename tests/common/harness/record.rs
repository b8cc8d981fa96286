//! Builder for JSON records fed to the `records` command.

#![allow(dead_code)]

use serde_json::{Map, Value};

/// A record under construction, serialized as a JSON object.
#[derive(Debug, Clone, Default)]
pub struct TestRecord {
    fields: Map<String, Value>,
}

impl TestRecord {
    /// Creates a record with the default `id` and `title` attributes.
    pub fn new(id: impl Into<Value>, title: &str) -> Self {
        Self::empty().field("id", id).field("title", title)
    }

    /// Creates a record with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Returns the record as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}
