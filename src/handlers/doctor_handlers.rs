use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::error::AppError;
use crate::models::common::StatusResponse;
use crate::models::object_id::ObjectId;
use crate::models::runtime_config::AppState;
use crate::models::schedule::{Availability, AvailabilityRequest, Unavailability, UnavailabilityRequest};
use crate::models::user::Role;
use crate::utils::request_parsing::canonical_id;

/// List every user registered as a doctor
pub async fn list_doctors(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let doctors = state.user_repository.list_by_role(Role::Doctor).await?;
    Ok(HttpResponse::Ok().json(doctors))
}

pub async fn doctor_appointments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let appointments = state.appointment_repository.list_by_doctor(&doctor_id).await?;
    Ok(HttpResponse::Ok().json(appointments))
}

/// Completed-appointment count, points and salary for a doctor
pub async fn doctor_stats(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let stats = state.stats_service.doctor_stats(&doctor_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Distinct patients that have at least one appointment with the doctor
pub async fn doctor_patients(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let appointments = state.appointment_repository.list_by_doctor(&doctor_id).await?;

    let mut patient_ids: Vec<ObjectId> = Vec::new();
    for appointment in &appointments {
        // References are loose strings; unparseable ones are skipped
        if let Ok(id) = ObjectId::parse(&appointment.patient_id) {
            if !patient_ids.contains(&id) {
                patient_ids.push(id);
            }
        }
    }
    debug!("Doctor {} has {} distinct patients", doctor_id, patient_ids.len());

    let patients = state.user_repository.find_many_by_ids(&patient_ids).await?;
    Ok(HttpResponse::Ok().json(patients))
}

pub async fn set_availability(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AvailabilityRequest>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let request = body.into_inner();

    let availability = Availability {
        doctor_id,
        week_start: request.week_start,
        available_slots: request.available_slots,
    };
    let id = state.schedule_repository.create_availability(&availability).await?;
    info!("Recorded availability {} for doctor {}", id, availability.doctor_id);

    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

pub async fn add_unavailability(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UnavailabilityRequest>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let request = body.into_inner();

    let unavailability = Unavailability {
        doctor_id,
        date: request.date,
        reason: request.reason,
    };
    state.schedule_repository.create_unavailability(&unavailability).await?;

    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

pub async fn list_unavailability(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let entries = state.schedule_repository.list_unavailability(&doctor_id).await?;
    Ok(HttpResponse::Ok().json(entries))
}
