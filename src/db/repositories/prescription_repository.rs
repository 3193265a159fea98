use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::object_id::ObjectId;
use crate::models::prescription::Prescription;
use crate::models::stored::{to_fields, Stored};

#[derive(Clone)]
pub struct PrescriptionRepository {
    store: Arc<dyn DocumentStore>,
}

impl PrescriptionRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, prescription: &Prescription) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::PRESCRIPTION, to_fields(prescription)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create prescription: {}", e)))?;
        Ok(id)
    }

    pub async fn list_by_appointment(&self, appointment_id: &str) -> Result<Vec<Stored<Prescription>>, AppError> {
        let documents = self
            .store
            .find(collection::PRESCRIPTION, &Filter::new().eq("appointment_id", appointment_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn list_by_patient(&self, patient_id: &str) -> Result<Vec<Stored<Prescription>>, AppError> {
        let documents = self
            .store
            .find(collection::PRESCRIPTION, &Filter::new().eq("patient_id", patient_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }
}
