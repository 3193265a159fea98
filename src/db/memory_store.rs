use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::db::document_store::{
    prepare_document, timestamp_now, Document, DocumentStore, Filter, StoreError, ID_FIELD,
    UPDATED_AT_FIELD,
};
use crate::models::object_id::ObjectId;

/// Process-local document store backed by a concurrent map of collections.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<DashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections.get(collection).map(|docs| docs.len()).unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, collection: &str, fields: Document) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let document = prepare_document(fields, &id);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        log::debug!("Inserted document {} into {}", id, collection);
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let documents = match self.collections.get(collection) {
            Some(docs) => docs.iter().filter(|d| filter.matches(d)).cloned().collect(),
            None => Vec::new(),
        };
        Ok(documents)
    }

    async fn update_one(&self, collection: &str, filter: &Filter, set: Document) -> Result<u64, StoreError> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(document) = docs.iter_mut().find(|d| filter.matches(d)) else {
            return Ok(0);
        };

        for (key, value) in set {
            if key != ID_FIELD {
                document.insert(key, value);
            }
        }
        document.insert(UPDATED_AT_FIELD.to_string(), Value::String(timestamp_now()));
        Ok(1)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.collections.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[actix_rt::test]
    async fn test_create_then_find_by_id() {
        let store = MemoryDocumentStore::new();
        let id = store.create("user", fields(json!({"name": "ann"}))).await.unwrap();

        let found = store.find_one("user", &Filter::by_id(&id)).await.unwrap().unwrap();
        assert_eq!(found["name"], json!("ann"));
        assert_eq!(found["_id"], json!(id.to_hex()));
    }

    #[actix_rt::test]
    async fn test_find_preserves_insertion_order() {
        let store = MemoryDocumentStore::new();
        for n in 0..5 {
            store.create("appointment", fields(json!({"n": n, "doctor_id": "d"}))).await.unwrap();
        }
        store.create("appointment", fields(json!({"n": 99, "doctor_id": "other"}))).await.unwrap();

        let found = store.find("appointment", &Filter::new().eq("doctor_id", "d")).await.unwrap();
        let ns: Vec<i64> = found.iter().map(|d| d["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![0, 1, 2, 3, 4]);
    }

    #[actix_rt::test]
    async fn test_find_on_unknown_collection_is_empty() {
        let store = MemoryDocumentStore::new();
        assert!(store.find("nothing", &Filter::new()).await.unwrap().is_empty());
        assert!(store.find_one("nothing", &Filter::new()).await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_update_one_merges_fields_and_keeps_id() {
        let store = MemoryDocumentStore::new();
        let id = store
            .create("appointment", fields(json!({"payment_status": "pending", "status": "scheduled"})))
            .await
            .unwrap();

        let matched = store
            .update_one(
                "appointment",
                &Filter::by_id(&id),
                fields(json!({"payment_status": "paid", "_id": "ignored"})),
            )
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let doc = store.find_one("appointment", &Filter::by_id(&id)).await.unwrap().unwrap();
        assert_eq!(doc["payment_status"], json!("paid"));
        assert_eq!(doc["status"], json!("scheduled"));
        assert_eq!(doc["_id"], json!(id.to_hex()));
    }

    #[actix_rt::test]
    async fn test_update_one_without_match() {
        let store = MemoryDocumentStore::new();
        let matched = store
            .update_one("appointment", &Filter::by_id(&ObjectId::new()), Document::new())
            .await
            .unwrap();
        assert_eq!(matched, 0);
    }

    #[actix_rt::test]
    async fn test_collection_names_sorted() {
        let store = MemoryDocumentStore::new();
        store.create("user", Document::new()).await.unwrap();
        store.create("billing", Document::new()).await.unwrap();
        store.create("user", Document::new()).await.unwrap();
        assert_eq!(store.collection_names().await.unwrap(), vec!["billing", "user"]);
        assert_eq!(store.count("user"), 2);
    }
}
