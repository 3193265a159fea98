use std::sync::Arc;

use crate::db::repositories::{AppointmentRepository, ProfileRepository};
use crate::error::AppError;
use crate::models::appointment::AppointmentStatus;
use crate::models::doctor_stats::DoctorStats;
use crate::models::profile::DEFAULT_RATE_PER_POINT;

/// Points earned per completed appointment.
pub const POINTS_PER_COMPLETED_APPOINTMENT: u64 = 1;

pub fn compute_salary(points: u64, rate_per_point: f64) -> f64 {
    points as f64 * rate_per_point
}

#[derive(Clone)]
pub struct StatsService {
    appointment_repository: Arc<AppointmentRepository>,
    profile_repository: Arc<ProfileRepository>,
}

impl StatsService {
    pub fn new(
        appointment_repository: Arc<AppointmentRepository>,
        profile_repository: Arc<ProfileRepository>,
    ) -> Self {
        Self {
            appointment_repository,
            profile_repository,
        }
    }

    pub async fn doctor_stats(&self, doctor_id: &str) -> Result<DoctorStats, AppError> {
        let treated_patients = self
            .appointment_repository
            .count_by_doctor_and_status(doctor_id, AppointmentStatus::Completed)
            .await?;
        let points = treated_patients * POINTS_PER_COMPLETED_APPOINTMENT;

        let rate_per_point = self
            .profile_repository
            .find_doctor_profile(doctor_id)
            .await?
            .map(|profile| profile.rate_per_point)
            .unwrap_or(DEFAULT_RATE_PER_POINT);

        log::debug!(
            "Stats for doctor {}: {} completed, rate {}",
            doctor_id, treated_patients, rate_per_point
        );

        Ok(DoctorStats {
            treated_patients,
            points,
            salary: compute_salary(points, rate_per_point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::document_store::DocumentStore;
    use crate::db::memory_store::MemoryDocumentStore;
    use crate::models::appointment::Appointment;
    use crate::models::object_id::ObjectId;
    use crate::models::profile::DoctorProfile;

    fn service() -> (StatsService, Arc<AppointmentRepository>, Arc<ProfileRepository>) {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let appointments = Arc::new(AppointmentRepository::new(store.clone()));
        let profiles = Arc::new(ProfileRepository::new(store));
        (StatsService::new(appointments.clone(), profiles.clone()), appointments, profiles)
    }

    async fn book(appointments: &AppointmentRepository, doctor_id: &str, status: AppointmentStatus) {
        let id = appointments
            .create(&Appointment::scheduled(ObjectId::new().to_hex(), doctor_id, "2026-10-21T10:00:00", None, None))
            .await
            .unwrap();
        appointments.update_status(&id, status).await.unwrap();
    }

    #[tokio::test]
    async fn test_salary_uses_default_rate_without_profile() {
        let (service, appointments, _) = service();
        let doctor = ObjectId::new().to_hex();
        for _ in 0..3 {
            book(&appointments, &doctor, AppointmentStatus::Completed).await;
        }
        book(&appointments, &doctor, AppointmentStatus::Scheduled).await;
        book(&appointments, &doctor, AppointmentStatus::Cancelled).await;

        let stats = service.doctor_stats(&doctor).await.unwrap();
        assert_eq!(stats, DoctorStats { treated_patients: 3, points: 3, salary: 300.0 });
    }

    #[tokio::test]
    async fn test_salary_uses_profile_rate() {
        let (service, appointments, profiles) = service();
        let doctor = ObjectId::new().to_hex();
        profiles
            .create_doctor_profile(&DoctorProfile {
                user_id: doctor.clone(),
                specialty: Some("cardiology".into()),
                rate_per_point: 250.0,
            })
            .await
            .unwrap();
        book(&appointments, &doctor, AppointmentStatus::Completed).await;
        book(&appointments, &doctor, AppointmentStatus::Completed).await;

        let stats = service.doctor_stats(&doctor).await.unwrap();
        assert_eq!(stats.points, 2);
        assert_eq!(stats.salary, 500.0);
    }

    #[tokio::test]
    async fn test_no_appointments() {
        let (service, _, _) = service();
        let stats = service.doctor_stats(&ObjectId::new().to_hex()).await.unwrap();
        assert_eq!(stats, DoctorStats { treated_patients: 0, points: 0, salary: 0.0 });
    }
}
