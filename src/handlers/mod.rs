pub mod admin_handlers;
pub mod appointment_handlers;
pub mod auth_handlers;
pub mod doctor_handlers;
pub mod health;
pub mod patient_handlers;
pub mod prescription_handlers;
