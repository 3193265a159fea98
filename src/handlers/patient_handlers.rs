use actix_web::{web, HttpResponse};
use log::info;

use crate::error::AppError;
use crate::models::appointment::{Appointment, AppointmentCreatedResponse, CreateAppointmentRequest};
use crate::models::prescription::PatientHistory;
use crate::models::runtime_config::AppState;
use crate::models::user::Role;
use crate::utils::request_parsing::canonical_id;

/// List every user registered as a patient
pub async fn list_patients(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let patients = state.user_repository.list_by_role(Role::Patient).await?;
    Ok(HttpResponse::Ok().json(patients))
}

/// Book an appointment; it starts scheduled with payment pending
pub async fn create_appointment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    let patient_id = canonical_id(&path)?;
    let request = body.into_inner();
    let doctor_id = canonical_id(&request.doctor_id)?;

    let appointment = Appointment::scheduled(
        patient_id,
        doctor_id,
        request.scheduled_at,
        request.reason,
        request.payment_method,
    );
    let appointment_id = state.appointment_repository.create(&appointment).await?;
    info!(
        "Patient {} booked appointment {} with doctor {}",
        appointment.patient_id, appointment_id, appointment.doctor_id
    );

    Ok(HttpResponse::Ok().json(AppointmentCreatedResponse {
        appointment_id: appointment_id.to_hex(),
    }))
}

pub async fn patient_appointments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let patient_id = canonical_id(&path)?;
    let appointments = state.appointment_repository.list_by_patient(&patient_id).await?;
    Ok(HttpResponse::Ok().json(appointments))
}

/// Appointments and prescriptions on record for a patient
pub async fn patient_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let patient_id = canonical_id(&path)?;

    let appointments = state.appointment_repository.list_by_patient(&patient_id).await?;
    let prescriptions = state.prescription_repository.list_by_patient(&patient_id).await?;

    Ok(HttpResponse::Ok().json(PatientHistory {
        appointments,
        prescriptions,
    }))
}
