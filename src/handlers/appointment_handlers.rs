use actix_web::{web, HttpResponse};
use log::{debug, warn};

use crate::error::AppError;
use crate::models::appointment::{PaymentUpdateRequest, StatusUpdateRequest};
use crate::models::billing::BillingRequest;
use crate::models::common::StatusResponse;
use crate::models::object_id::ObjectId;
use crate::models::runtime_config::AppState;

/// Set the payment status of an appointment
pub async fn update_payment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PaymentUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let appointment_id = ObjectId::parse(path.trim())?;
    let status = body.into_inner().status;

    let matched = state
        .appointment_repository
        .update_payment_status(&appointment_id, status)
        .await?;
    if !matched {
        warn!("Payment update for unknown appointment {}", appointment_id);
    }

    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

/// Move an appointment to scheduled, completed or cancelled
pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<StatusUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let appointment_id = ObjectId::parse(path.trim())?;
    let status = body.into_inner().status;

    let matched = state
        .appointment_repository
        .update_status(&appointment_id, status)
        .await?;
    if !matched {
        warn!("Status update for unknown appointment {}", appointment_id);
    }

    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

/// Generate and persist a bill for an appointment
pub async fn generate_bill(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BillingRequest>,
) -> Result<HttpResponse, AppError> {
    let appointment_id = ObjectId::parse(path.trim())?;
    let request = body.into_inner();
    debug!(
        "Billing appointment {} (operation: {:?}, room: {:?})",
        appointment_id, request.operation_id, request.roomtype_name
    );

    let bill = state.billing_service.generate_bill(&appointment_id, &request).await?;

    Ok(HttpResponse::Ok().json(bill))
}
