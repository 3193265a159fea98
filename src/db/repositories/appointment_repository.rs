use serde_json::{Map, Value};
use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::appointment::{Appointment, AppointmentStatus, PaymentMethod, PaymentStatus};
use crate::models::object_id::ObjectId;
use crate::models::stored::{to_fields, Stored};

#[derive(Clone)]
pub struct AppointmentRepository {
    store: Arc<dyn DocumentStore>,
}

impl AppointmentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, appointment: &Appointment) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::APPOINTMENT, to_fields(appointment)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create appointment: {}", e)))?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Stored<Appointment>>, AppError> {
        let document = self
            .store
            .find_one(collection::APPOINTMENT, &Filter::by_id(id))
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch appointment: {}", e)))?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    pub async fn list_by_doctor(&self, doctor_id: &str) -> Result<Vec<Stored<Appointment>>, AppError> {
        let documents = self
            .store
            .find(collection::APPOINTMENT, &Filter::new().eq("doctor_id", doctor_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn list_by_patient(&self, patient_id: &str) -> Result<Vec<Stored<Appointment>>, AppError> {
        let documents = self
            .store
            .find(collection::APPOINTMENT, &Filter::new().eq("patient_id", patient_id))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn count_by_doctor_and_status(
        &self,
        doctor_id: &str,
        status: AppointmentStatus,
    ) -> Result<u64, AppError> {
        let filter = Filter::new()
            .eq("doctor_id", doctor_id)
            .eq("status", status.as_str());
        let documents = self.store.find(collection::APPOINTMENT, &filter).await?;
        Ok(documents.len() as u64)
    }

    /// Returns true when an appointment was matched.
    pub async fn update_status(&self, id: &ObjectId, status: AppointmentStatus) -> Result<bool, AppError> {
        let mut set = Map::new();
        set.insert("status".to_string(), Value::from(status.as_str()));
        self.update_fields(id, set).await
    }

    pub async fn update_payment_status(&self, id: &ObjectId, status: PaymentStatus) -> Result<bool, AppError> {
        let mut set = Map::new();
        set.insert("payment_status".to_string(), Value::from(status.as_str()));
        self.update_fields(id, set).await
    }

    pub async fn update_payment(
        &self,
        id: &ObjectId,
        method: PaymentMethod,
        status: PaymentStatus,
    ) -> Result<bool, AppError> {
        let mut set = Map::new();
        set.insert("payment_method".to_string(), Value::from(method.as_str()));
        set.insert("payment_status".to_string(), Value::from(status.as_str()));
        self.update_fields(id, set).await
    }

    async fn update_fields(&self, id: &ObjectId, set: Map<String, Value>) -> Result<bool, AppError> {
        let matched = self
            .store
            .update_one(collection::APPOINTMENT, &Filter::by_id(id), set)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update appointment: {}", e)))?;
        Ok(matched > 0)
    }
}
