use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::object_id::ObjectId;
use crate::models::schedule::{Availability, Unavailability};
use crate::models::stored::{to_fields, Stored};

#[derive(Clone)]
pub struct ScheduleRepository {
    store: Arc<dyn DocumentStore>,
}

impl ScheduleRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create_availability(&self, availability: &Availability) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::AVAILABILITY, to_fields(availability)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to record availability: {}", e)))?;
        Ok(id)
    }

    pub async fn create_unavailability(&self, unavailability: &Unavailability) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::UNAVAILABILITY, to_fields(unavailability)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to record unavailability: {}", e)))?;
        Ok(id)
    }

    pub async fn list_availability(&self, doctor_id: &str) -> Result<Vec<Stored<Availability>>, AppError> {
        let documents = self
            .store
            .find(collection::AVAILABILITY, &Filter::new().eq("doctor_id", doctor_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn list_unavailability(&self, doctor_id: &str) -> Result<Vec<Stored<Unavailability>>, AppError> {
        let documents = self
            .store
            .find(collection::UNAVAILABILITY, &Filter::new().eq("doctor_id", doctor_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }
}
