//! Fixture models
//!
//! Defines collections, fixture records, and the ids the CMS hands back.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// CMS collections that receive fixture records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Genres,
    Tags,
    Engines,
    Platforms,
    Developers,
    Games,
}

impl Collection {
    /// Endpoint segment under `/api/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            Collection::Genres => "genres",
            Collection::Tags => "tags",
            Collection::Engines => "engines",
            Collection::Platforms => "platforms",
            Collection::Developers => "developers",
            Collection::Games => "games",
        }
    }

    /// Full request path, e.g. `/api/genres`
    pub fn path(&self) -> String {
        format!("/api/{}", self.endpoint())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Id assigned by the CMS to a created record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Interpret a JSON scalar as a record id
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordId::Number),
            Value::String(s) if !s.is_empty() => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            RecordId::Number(n) => Value::from(*n),
            RecordId::Text(s) => Value::from(s.as_str()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// One record to create, with the label used in progress output
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub label: String,
    pub payload: Value,
}

impl FixtureRecord {
    pub fn new(label: impl Into<String>, payload: Value) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }

    /// Set or replace one field of the payload
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        if let Value::Object(fields) = &mut self.payload {
            fields.insert(key.into(), value);
        }
        self
    }

    /// Request body in the `{"data": ...}` envelope the CMS expects
    pub fn envelope(&self) -> Value {
        serde_json::json!({ "data": self.payload })
    }
}

/// Ordered records bound for a single collection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FixtureBatch {
    pub title: String,
    pub collection: Collection,
    pub records: Vec<FixtureRecord>,
}

impl FixtureBatch {
    pub fn new(title: impl Into<String>, collection: Collection) -> Self {
        Self {
            title: title.into(),
            collection,
            records: Vec::new(),
        }
    }

    pub fn record(mut self, record: FixtureRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
