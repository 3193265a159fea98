use std::sync::Arc;
use tracing::info;

use crate::db::repositories::{ProfileRepository, UserRepository};
use crate::error::AppError;
use crate::models::profile::{DoctorProfile, PatientProfile};
use crate::models::stored::Stored;
use crate::models::user::{Role, User};

/// Identity is asserted by the caller: a login for an unknown (email, role)
/// pair registers the user and seeds a role-specific profile.
#[derive(Clone)]
pub struct AuthService {
    user_repository: Arc<UserRepository>,
    profile_repository: Arc<ProfileRepository>,
}

impl AuthService {
    pub fn new(user_repository: Arc<UserRepository>, profile_repository: Arc<ProfileRepository>) -> Self {
        Self {
            user_repository,
            profile_repository,
        }
    }

    pub async fn login(&self, email: &str, role: Role) -> Result<Stored<User>, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::Validation("email must not be empty".to_string()));
        }

        if let Some(user) = self.user_repository.find_by_email_and_role(email, role).await? {
            info!(user_id = %user.id, role = %role, "login_existing_user");
            return Ok(user);
        }

        let user_id = self.user_repository.create(&User::from_login(email, role)).await?;
        match role {
            Role::Doctor => {
                self.profile_repository
                    .create_doctor_profile(&DoctorProfile::with_defaults(user_id.to_hex()))
                    .await?;
            }
            Role::Patient => {
                self.profile_repository
                    .create_patient_profile(&PatientProfile::with_defaults(user_id.to_hex()))
                    .await?;
            }
            Role::Admin => {}
        }
        info!(user_id = %user_id, role = %role, "login_registered_user");

        self.user_repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("User {} vanished after creation", user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::document_store::DocumentStore;
    use crate::db::memory_store::MemoryDocumentStore;
    use crate::db::repositories::collection;
    use crate::models::profile::DEFAULT_RATE_PER_POINT;

    fn service() -> (AuthService, MemoryDocumentStore, Arc<ProfileRepository>) {
        let store = MemoryDocumentStore::new();
        let shared: Arc<dyn DocumentStore> = Arc::new(store.clone());
        let users = Arc::new(UserRepository::new(shared.clone()));
        let profiles = Arc::new(ProfileRepository::new(shared));
        (AuthService::new(users, profiles.clone()), store, profiles)
    }

    #[tokio::test]
    async fn test_login_twice_does_not_duplicate() {
        let (service, store, _) = service();

        let first = service.login("dr.house@ppth.org", Role::Doctor).await.unwrap();
        let second = service.login("dr.house@ppth.org", Role::Doctor).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.name, "dr.house");
        assert_eq!(store.count(collection::USER), 1);
        assert_eq!(store.count(collection::DOCTOR_PROFILE), 1);
    }

    #[tokio::test]
    async fn test_doctor_login_seeds_default_profile() {
        let (service, _, profiles) = service();
        let user = service.login("a@b.c", Role::Doctor).await.unwrap();

        let profile = profiles.find_doctor_profile(&user.id.to_hex()).await.unwrap().unwrap();
        assert_eq!(profile.rate_per_point, DEFAULT_RATE_PER_POINT);
        assert_eq!(profile.specialty, None);
    }

    #[tokio::test]
    async fn test_patient_login_seeds_profile_without_policy() {
        let (service, store, profiles) = service();
        let user = service.login("pat@example.com", Role::Patient).await.unwrap();

        let profile = profiles.find_patient_profile(&user.id.to_hex()).await.unwrap().unwrap();
        assert_eq!(profile.insurance_policy_id, None);
        assert_eq!(store.count(collection::DOCTOR_PROFILE), 0);
    }

    #[tokio::test]
    async fn test_same_email_different_role_is_a_different_user() {
        let (service, store, _) = service();
        let as_patient = service.login("x@y.z", Role::Patient).await.unwrap();
        let as_admin = service.login("x@y.z", Role::Admin).await.unwrap();

        assert_ne!(as_patient.id, as_admin.id);
        assert_eq!(store.count(collection::USER), 2);
        assert_eq!(store.count(collection::PATIENT_PROFILE), 1);
    }

    #[tokio::test]
    async fn test_blank_email_rejected() {
        let (service, _, _) = service();
        assert!(matches!(service.login("  ", Role::Admin).await, Err(AppError::Validation(_))));
    }
}
