use actix_web::web;

use crate::handlers;
use crate::models::runtime_config::AppState;
use crate::utils::request_parsing::json_config;

/// Registers shared state, extractor configuration and every route.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state))
            .app_data(json_config())
            .service(web::scope("/api").configure(configure_routes))
            .configure(configure_public_routes);
    }
}

/// Configures the REST API. Mounted under the "/api" scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(handlers::auth_handlers::login))
        .route("/doctors", web::get().to(handlers::doctor_handlers::list_doctors))
        .route("/patients", web::get().to(handlers::patient_handlers::list_patients));

    // Doctor routes (/api/doctor/{doctor_id}/*)
    cfg.service(
        web::scope("/doctor/{doctor_id}")
            .route("/appointments", web::get().to(handlers::doctor_handlers::doctor_appointments))
            .route("/stats", web::get().to(handlers::doctor_handlers::doctor_stats))
            .route("/patients", web::get().to(handlers::doctor_handlers::doctor_patients))
            .route("/availability", web::post().to(handlers::doctor_handlers::set_availability))
            .route("/unavailability", web::post().to(handlers::doctor_handlers::add_unavailability))
            .route("/unavailability", web::get().to(handlers::doctor_handlers::list_unavailability))
            .route("/prescription", web::post().to(handlers::prescription_handlers::add_prescription))
    );

    // Patient routes (/api/patient/{patient_id}/*)
    cfg.service(
        web::scope("/patient/{patient_id}")
            .route("/appointments", web::post().to(handlers::patient_handlers::create_appointment))
            .route("/appointments", web::get().to(handlers::patient_handlers::patient_appointments))
            .route("/history", web::get().to(handlers::patient_handlers::patient_history))
    );

    cfg.route(
        "/prescription/{appointment_id}",
        web::get().to(handlers::prescription_handlers::get_prescriptions_by_appointment),
    );

    // Appointment routes (/api/appointment/{appointment_id}/*)
    cfg.service(
        web::scope("/appointment/{appointment_id}")
            .route("/payment", web::post().to(handlers::appointment_handlers::update_payment))
            .route("/status", web::post().to(handlers::appointment_handlers::update_status))
            .route("/bill", web::post().to(handlers::appointment_handlers::generate_bill))
    );

    // Admin routes (/api/admin/*)
    cfg.service(
        web::scope("/admin")
            .route("/appointments", web::post().to(handlers::admin_handlers::admin_create_appointment))
            .route("/availability/{doctor_id}", web::get().to(handlers::admin_handlers::admin_get_availability))
            .route("/billing/{appointment_id}", web::get().to(handlers::admin_handlers::admin_get_billing))
            .route("/payment/cod/{appointment_id}", web::post().to(handlers::admin_handlers::admin_mark_cod_paid))
            .route("/operation", web::post().to(handlers::admin_handlers::create_operation))
            .route("/operations", web::get().to(handlers::admin_handlers::list_operations))
            .route("/roomtype", web::post().to(handlers::admin_handlers::create_roomtype))
            .route("/roomtypes", web::get().to(handlers::admin_handlers::list_roomtypes))
            .route("/insurance", web::post().to(handlers::admin_handlers::create_insurance))
            .route("/insurance", web::get().to(handlers::admin_handlers::list_insurance_policies))
    );
}

/// Root banner, health check and store probe (outside "/api").
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health::root))
        .route("/health", web::get().to(handlers::health::health_check))
        .route("/test", web::get().to(handlers::health::store_probe));
}
