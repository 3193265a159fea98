//! Generic document accessor.
//!
//! Collections hold flat JSON objects keyed by an [`ObjectId`] stored in the
//! `_id` field. Backends implement [`DocumentStore`]; everything above this
//! layer talks to the trait object so the backing database can be swapped.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::models::object_id::ObjectId;

/// A stored document: a JSON object including `_id`.
pub type Document = Map<String, Value>;

pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A single field condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field is present and equals the value. Intended for scalar values.
    Eq(Value),
    /// Field equals any of the values.
    In(Vec<Value>),
}

impl Condition {
    fn matches(&self, actual: Option<&Value>) -> bool {
        match self {
            Condition::Eq(expected) => actual == Some(expected),
            Condition::In(candidates) => actual.is_some_and(|v| candidates.contains(v)),
        }
    }
}

/// Conjunction of field conditions. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Condition)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: &ObjectId) -> Self {
        Self::new().eq(ID_FIELD, id.to_hex())
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), Condition::Eq(value.into())));
        self
    }

    pub fn is_in<V: Into<Value>>(mut self, field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.conditions.push((field.into(), Condition::In(values)));
        self
    }

    pub fn conditions(&self) -> &[(String, Condition)] {
        &self.conditions
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, condition)| condition.matches(document.get(field)))
    }
}

/// Current time in the format stored in `created_at`/`updated_at`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Stamps a fresh id and timestamps onto caller-supplied fields.
pub fn prepare_document(mut fields: Document, id: &ObjectId) -> Document {
    let now = timestamp_now();
    fields.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
    fields.insert(CREATED_AT_FIELD.to_string(), Value::String(now.clone()));
    fields.insert(UPDATED_AT_FIELD.to_string(), Value::String(now));
    fields
}

/// Reads the `_id` of a stored document.
pub fn document_id(document: &Document) -> Result<ObjectId, StoreError> {
    document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::InvalidDocument("document has no _id".to_string()))
        .and_then(|raw| {
            ObjectId::parse(raw).map_err(|_| StoreError::InvalidDocument(format!("malformed _id: {}", raw)))
        })
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend label reported by the connectivity probe.
    fn backend_name(&self) -> &'static str;

    /// Inserts `fields` as a new document and returns its id.
    async fn create(&self, collection: &str, fields: Document) -> Result<ObjectId, StoreError>;

    /// All documents matching `filter`, in insertion order.
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        Ok(self.find(collection, filter).await?.into_iter().next())
    }

    /// Merges `set` into the first matching document. Returns the number of
    /// documents matched (0 or 1).
    async fn update_one(&self, collection: &str, filter: &Filter, set: Document) -> Result<u64, StoreError>;

    /// Distinct collection names, sorted.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
