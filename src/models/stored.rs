use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::document_store::{Document, StoreError};
use crate::models::object_id::ObjectId;

/// A typed document as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl<T: DeserializeOwned> Stored<T> {
    pub fn from_document(document: Document) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(Value::Object(document))?)
    }

    pub fn from_documents(documents: Vec<Document>) -> Result<Vec<Self>, StoreError> {
        documents.into_iter().map(Self::from_document).collect()
    }
}

impl<T> std::ops::Deref for Stored<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Serialises an entity into the field map handed to the store.
pub fn to_fields<T: Serialize>(entity: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "entity did not serialise to an object: {}",
            other
        ))),
    }
}
