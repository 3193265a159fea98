use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::object_id::ObjectId;
use crate::models::profile::{DoctorProfile, PatientProfile};
use crate::models::stored::{to_fields, Stored};

/// Doctor and patient profiles, both keyed by the owning user's id.
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create_doctor_profile(&self, profile: &DoctorProfile) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::DOCTOR_PROFILE, to_fields(profile)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create doctor profile: {}", e)))?;
        Ok(id)
    }

    pub async fn create_patient_profile(&self, profile: &PatientProfile) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::PATIENT_PROFILE, to_fields(profile)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create patient profile: {}", e)))?;
        Ok(id)
    }

    pub async fn find_doctor_profile(&self, user_id: &str) -> Result<Option<Stored<DoctorProfile>>, AppError> {
        let document = self
            .store
            .find_one(collection::DOCTOR_PROFILE, &Filter::new().eq("user_id", user_id))
            .await?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    pub async fn find_patient_profile(&self, user_id: &str) -> Result<Option<Stored<PatientProfile>>, AppError> {
        let document = self
            .store
            .find_one(collection::PATIENT_PROFILE, &Filter::new().eq("user_id", user_id))
            .await?;
        Ok(document.map(Stored::from_document).transpose()?)
    }
}
