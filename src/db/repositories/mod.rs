pub mod appointment_repository;
pub mod billing_repository;
pub mod catalog_repository;
pub mod prescription_repository;
pub mod profile_repository;
pub mod schedule_repository;
pub mod user_repository;

pub use appointment_repository::AppointmentRepository;
pub use billing_repository::BillingRepository;
pub use catalog_repository::CatalogRepository;
pub use prescription_repository::PrescriptionRepository;
pub use profile_repository::ProfileRepository;
pub use schedule_repository::ScheduleRepository;
pub use user_repository::UserRepository;

/// Collection names, one per entity kind.
pub mod collection {
    pub const USER: &str = "user";
    pub const DOCTOR_PROFILE: &str = "doctorprofile";
    pub const PATIENT_PROFILE: &str = "patientprofile";
    pub const AVAILABILITY: &str = "availability";
    pub const UNAVAILABILITY: &str = "unavailability";
    pub const APPOINTMENT: &str = "appointment";
    pub const PRESCRIPTION: &str = "prescription";
    pub const BILLING: &str = "billing";
    pub const OPERATION: &str = "operation";
    pub const ROOMTYPE: &str = "roomtype";
    pub const INSURANCE_POLICY: &str = "insurancepolicy";
}
