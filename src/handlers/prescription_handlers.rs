use actix_web::{web, HttpResponse};
use log::info;

use crate::error::AppError;
use crate::models::object_id::ObjectId;
use crate::models::prescription::{Prescription, PrescriptionCreatedResponse, PrescriptionRequest};
use crate::models::runtime_config::AppState;
use crate::utils::request_parsing::canonical_id;

/// Record a prescription against an existing appointment. The patient is
/// taken from the appointment, not from the request.
pub async fn add_prescription(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PrescriptionRequest>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let request = body.into_inner();
    let appointment_id = ObjectId::parse(request.appointment_id.trim())?;

    let appointment = state
        .appointment_repository
        .find_by_id(&appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    let prescription = Prescription {
        appointment_id: appointment_id.to_hex(),
        doctor_id,
        patient_id: appointment.patient_id.clone(),
        notes: request.notes,
        medications: request.medications,
        follow_up_date: request.follow_up_date,
    };
    let prescription_id = state.prescription_repository.create(&prescription).await?;
    info!("Prescription {} written for appointment {}", prescription_id, appointment_id);

    Ok(HttpResponse::Ok().json(PrescriptionCreatedResponse {
        prescription_id: prescription_id.to_hex(),
    }))
}

pub async fn get_prescriptions_by_appointment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let appointment_id = canonical_id(&path)?;
    let prescriptions = state.prescription_repository.list_by_appointment(&appointment_id).await?;
    Ok(HttpResponse::Ok().json(prescriptions))
}
