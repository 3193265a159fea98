use std::sync::Arc;

use crate::config::AppSettings;
use crate::db::document_store::DocumentStore;
use crate::db::repositories::{
    AppointmentRepository, BillingRepository, CatalogRepository, PrescriptionRepository,
    ProfileRepository, ScheduleRepository, UserRepository,
};
use crate::services::{AuthService, BillingService, StatsService};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub store: Arc<dyn DocumentStore>,
    pub user_repository: Arc<UserRepository>,
    pub profile_repository: Arc<ProfileRepository>,
    pub schedule_repository: Arc<ScheduleRepository>,
    pub appointment_repository: Arc<AppointmentRepository>,
    pub prescription_repository: Arc<PrescriptionRepository>,
    pub billing_repository: Arc<BillingRepository>,
    pub catalog_repository: Arc<CatalogRepository>,
    pub auth_service: Arc<AuthService>,
    pub stats_service: Arc<StatsService>,
    pub billing_service: Arc<BillingService>,
}

impl AppState {
    /// Wires repositories and services around a single store handle.
    pub fn new(settings: AppSettings, store: Arc<dyn DocumentStore>) -> Self {
        let user_repository = Arc::new(UserRepository::new(store.clone()));
        let profile_repository = Arc::new(ProfileRepository::new(store.clone()));
        let schedule_repository = Arc::new(ScheduleRepository::new(store.clone()));
        let appointment_repository = Arc::new(AppointmentRepository::new(store.clone()));
        let prescription_repository = Arc::new(PrescriptionRepository::new(store.clone()));
        let billing_repository = Arc::new(BillingRepository::new(store.clone()));
        let catalog_repository = Arc::new(CatalogRepository::new(store.clone()));

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            profile_repository.clone(),
        ));
        let stats_service = Arc::new(StatsService::new(
            appointment_repository.clone(),
            profile_repository.clone(),
        ));
        let billing_service = Arc::new(BillingService::new(
            appointment_repository.clone(),
            catalog_repository.clone(),
            profile_repository.clone(),
            billing_repository.clone(),
        ));

        Self {
            settings: Arc::new(settings),
            store,
            user_repository,
            profile_repository,
            schedule_repository,
            appointment_repository,
            prescription_repository,
            billing_repository,
            catalog_repository,
            auth_service,
            stats_service,
            billing_service,
        }
    }
}
