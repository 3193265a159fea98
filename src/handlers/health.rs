use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::runtime_config::AppState;

/// Collections listed by the store probe.
const PROBE_COLLECTION_LIMIT: usize = 10;
/// Store error messages are cut to this many characters in probe output.
const PROBE_ERROR_CHARS: usize = 50;

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreProbeResponse {
    pub backend: String,
    pub store_backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Hospital Management Backend running".to_string(),
    })
}

pub async fn health_check() -> impl Responder {
    // Public health endpoint - only return basic status, no sensitive metrics
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}

fn truncate_error(message: &str) -> String {
    message.chars().take(PROBE_ERROR_CHARS).collect()
}

/// Store connectivity probe. Always answers 200; failures are reported in
/// the body.
pub async fn store_probe(state: web::Data<AppState>) -> impl Responder {
    let mut response = StoreProbeResponse {
        backend: "running".to_string(),
        store_backend: state.store.backend_name().to_string(),
        database: "not available".to_string(),
        database_url: state.settings.store.url.as_ref().map(|_| "set".to_string()),
        database_name: state.settings.store.name.clone(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.ping().await {
        Ok(()) => {
            response.database = "available".to_string();
            response.connection_status = "Connected".to_string();

            match state.store.collection_names().await {
                Ok(mut names) => {
                    names.truncate(PROBE_COLLECTION_LIMIT);
                    response.collections = names;
                    response.database = "connected & working".to_string();
                }
                Err(e) => {
                    log::warn!("Store probe could not list collections: {}", e);
                    response.database = format!("connected but error: {}", truncate_error(&e.to_string()));
                }
            }
        }
        Err(e) => {
            log::warn!("Store probe ping failed: {}", e);
            response.database = format!("error: {}", truncate_error(&e.to_string()));
        }
    }

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_error_counts_chars() {
        let long = "é".repeat(80);
        assert_eq!(truncate_error(&long).chars().count(), PROBE_ERROR_CHARS);
        assert_eq!(truncate_error("short"), "short");
    }
}
