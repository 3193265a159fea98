pub mod appointment;
pub mod billing;
pub mod catalog;
pub mod common;
pub mod doctor_stats;
pub mod object_id;
pub mod prescription;
pub mod profile;
pub mod runtime_config;
pub mod schedule;
pub mod stored;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, PaymentMethod, PaymentStatus};
pub use billing::{Billing, BillingDetails, BillingRequest, BillingResponse, LineItem};
pub use catalog::{InsurancePolicy, Operation, Roomtype};
pub use common::StatusResponse;
pub use doctor_stats::DoctorStats;
pub use object_id::ObjectId;
pub use prescription::{PatientHistory, Prescription};
pub use profile::{DoctorProfile, PatientProfile};
pub use runtime_config::AppState;
pub use schedule::{Availability, Unavailability};
pub use stored::Stored;
pub use user::{Role, User};
