use actix_web::{web, HttpResponse};
use log::debug;

use crate::error::AppError;
use crate::models::runtime_config::AppState;
use crate::models::user::{LoginRequest, LoginResponse};

/// Log in, registering the user on first sight of an (email, role) pair.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    debug!("Login request for {} as {}", request.email, request.role);

    let user = state.auth_service.login(&request.email, request.role).await?;

    Ok(HttpResponse::Ok().json(LoginResponse { user }))
}
