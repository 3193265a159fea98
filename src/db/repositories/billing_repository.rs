use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::billing::Billing;
use crate::models::object_id::ObjectId;
use crate::models::stored::{to_fields, Stored};

#[derive(Clone)]
pub struct BillingRepository {
    store: Arc<dyn DocumentStore>,
}

impl BillingRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, billing: &Billing) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::BILLING, to_fields(billing)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to persist billing: {}", e)))?;
        Ok(id)
    }

    pub async fn list_by_appointment(&self, appointment_id: &str) -> Result<Vec<Stored<Billing>>, AppError> {
        let documents = self
            .store
            .find(collection::BILLING, &Filter::new().eq("appointment_id", appointment_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }
}
