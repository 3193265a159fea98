use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter, ID_FIELD};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::object_id::ObjectId;
use crate::models::stored::{to_fields, Stored};
use crate::models::user::{Role, User};

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, user: &User) -> Result<ObjectId, AppError> {
        let id = self
            .store
            .create(collection::USER, to_fields(user)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create user: {}", e)))?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Stored<User>>, AppError> {
        let document = self.store.find_one(collection::USER, &Filter::by_id(id)).await?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    pub async fn find_by_email_and_role(&self, email: &str, role: Role) -> Result<Option<Stored<User>>, AppError> {
        let filter = Filter::new().eq("email", email).eq("role", role.as_str());
        let document = self
            .store
            .find_one(collection::USER, &filter)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch user by email: {}", e)))?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<Stored<User>>, AppError> {
        let documents = self
            .store
            .find(collection::USER, &Filter::new().eq("role", role.as_str()))
            .await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn find_many_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Stored<User>>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let filter = Filter::new().is_in(ID_FIELD, ids.iter().map(ObjectId::to_hex));
        let documents = self.store.find(collection::USER, &filter).await?;
        Ok(Stored::from_documents(documents)?)
    }
}
