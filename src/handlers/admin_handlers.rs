use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::error::AppError;
use crate::models::appointment::{AdminScheduleRequest, Appointment, AppointmentCreatedResponse, PaymentMethod, PaymentStatus};
use crate::models::catalog::{
    InsurancePolicy, InsurancePolicyCreatedResponse, Operation, OperationCreatedResponse, Roomtype,
    RoomtypeCreatedResponse,
};
use crate::models::common::StatusResponse;
use crate::models::object_id::ObjectId;
use crate::models::runtime_config::AppState;
use crate::utils::request_parsing::canonical_id;

/// Schedule an appointment on behalf of a patient
pub async fn admin_create_appointment(
    state: web::Data<AppState>,
    body: web::Json<AdminScheduleRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let patient_id = canonical_id(&request.patient_id)?;
    let doctor_id = canonical_id(&request.doctor_id)?;

    let appointment = Appointment::scheduled(patient_id, doctor_id, request.scheduled_at, request.reason, None);
    let appointment_id = state.appointment_repository.create(&appointment).await?;
    info!("Admin scheduled appointment {}", appointment_id);

    Ok(HttpResponse::Ok().json(AppointmentCreatedResponse {
        appointment_id: appointment_id.to_hex(),
    }))
}

pub async fn admin_get_availability(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doctor_id = canonical_id(&path)?;
    let availability = state.schedule_repository.list_availability(&doctor_id).await?;
    Ok(HttpResponse::Ok().json(availability))
}

pub async fn admin_get_billing(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let appointment_id = canonical_id(&path)?;
    let bills = state.billing_repository.list_by_appointment(&appointment_id).await?;
    Ok(HttpResponse::Ok().json(bills))
}

/// Mark a cash-on-delivery appointment as paid
pub async fn admin_mark_cod_paid(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let appointment_id = ObjectId::parse(path.trim())?;

    let matched = state
        .appointment_repository
        .update_payment(&appointment_id, PaymentMethod::Cod, PaymentStatus::Paid)
        .await?;
    if !matched {
        warn!("COD payment recorded for unknown appointment {}", appointment_id);
    }

    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

pub async fn create_operation(
    state: web::Data<AppState>,
    body: web::Json<Operation>,
) -> Result<HttpResponse, AppError> {
    let operation = body.into_inner();
    operation.validate()?;

    let operation_id = state.catalog_repository.create_operation(&operation).await?;
    info!("Created operation {} ({})", operation_id, operation.name);

    Ok(HttpResponse::Ok().json(OperationCreatedResponse {
        operation_id: operation_id.to_hex(),
    }))
}

pub async fn create_roomtype(
    state: web::Data<AppState>,
    body: web::Json<Roomtype>,
) -> Result<HttpResponse, AppError> {
    let roomtype = body.into_inner();
    roomtype.validate()?;

    let roomtype_id = state.catalog_repository.create_roomtype(&roomtype).await?;
    info!("Created room type {} ({})", roomtype_id, roomtype.name);

    Ok(HttpResponse::Ok().json(RoomtypeCreatedResponse {
        roomtype_id: roomtype_id.to_hex(),
    }))
}

pub async fn create_insurance(
    state: web::Data<AppState>,
    body: web::Json<InsurancePolicy>,
) -> Result<HttpResponse, AppError> {
    let policy = body.into_inner();
    policy.validate()?;

    let policy_id = state.catalog_repository.create_insurance_policy(&policy).await?;
    info!("Created insurance policy {} ({})", policy_id, policy.name);

    Ok(HttpResponse::Ok().json(InsurancePolicyCreatedResponse {
        insurance_policy_id: policy_id.to_hex(),
    }))
}

pub async fn list_operations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.catalog_repository.list_operations().await?))
}

pub async fn list_roomtypes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.catalog_repository.list_roomtypes().await?))
}

pub async fn list_insurance_policies(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.catalog_repository.list_insurance_policies().await?))
}
