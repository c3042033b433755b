use serde::Serialize;
use serde_json::{Map, Value};

use super::content_error::ContentError;

/// Request body fragment, keys kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Appends `other` after the existing keys. Fragments must be disjoint.
    pub fn merge(mut self, other: Map<String, Value>) -> Result<Self, ContentError> {
        for (key, value) in other {
            if self.0.contains_key(&key) {
                return Err(ContentError::ReservedKey(key));
            }
            self.0.insert(key, value);
        }
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}
