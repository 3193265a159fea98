use std::sync::Arc;

use crate::db::document_store::{DocumentStore, Filter};
use crate::db::repositories::collection;
use crate::error::AppError;
use crate::models::catalog::{InsurancePolicy, Operation, Roomtype};
use crate::models::object_id::ObjectId;
use crate::models::stored::{to_fields, Stored};

/// Admin-managed master data: operations, room types, insurance policies.
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn DocumentStore>,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create_operation(&self, operation: &Operation) -> Result<ObjectId, AppError> {
        Ok(self.store.create(collection::OPERATION, to_fields(operation)?).await?)
    }

    pub async fn create_roomtype(&self, roomtype: &Roomtype) -> Result<ObjectId, AppError> {
        Ok(self.store.create(collection::ROOMTYPE, to_fields(roomtype)?).await?)
    }

    pub async fn create_insurance_policy(&self, policy: &InsurancePolicy) -> Result<ObjectId, AppError> {
        Ok(self.store.create(collection::INSURANCE_POLICY, to_fields(policy)?).await?)
    }

    pub async fn find_operation(&self, id: &ObjectId) -> Result<Option<Stored<Operation>>, AppError> {
        let document = self.store.find_one(collection::OPERATION, &Filter::by_id(id)).await?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    /// Room types are looked up by name, the first one inserted wins.
    pub async fn find_roomtype_by_name(&self, name: &str) -> Result<Option<Stored<Roomtype>>, AppError> {
        let document = self
            .store
            .find_one(collection::ROOMTYPE, &Filter::new().eq("name", name))
            .await?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    pub async fn find_insurance_policy(&self, id: &ObjectId) -> Result<Option<Stored<InsurancePolicy>>, AppError> {
        let document = self
            .store
            .find_one(collection::INSURANCE_POLICY, &Filter::by_id(id))
            .await?;
        Ok(document.map(Stored::from_document).transpose()?)
    }

    pub async fn list_operations(&self) -> Result<Vec<Stored<Operation>>, AppError> {
        let documents = self.store.find(collection::OPERATION, &Filter::new()).await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn list_roomtypes(&self) -> Result<Vec<Stored<Roomtype>>, AppError> {
        let documents = self.store.find(collection::ROOMTYPE, &Filter::new()).await?;
        Ok(Stored::from_documents(documents)?)
    }

    pub async fn list_insurance_policies(&self) -> Result<Vec<Stored<InsurancePolicy>>, AppError> {
        let documents = self.store.find(collection::INSURANCE_POLICY, &Filter::new()).await?;
        Ok(Stored::from_documents(documents)?)
    }
}
