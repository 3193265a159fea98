use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use std::net::TcpListener;

use hospital_server::config::init_config;
use hospital_server::db::connection::connect_store;
use hospital_server::routes::configure_app;
use hospital_server::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load application settings
    let app_settings = match init_config() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            log::error!("Cannot start server without valid settings");
            std::process::exit(1);
        }
    };

    // Document store setup
    let store = match connect_store(&app_settings.store).await {
        Ok(store) => {
            log::info!("Document store ready ({})", store.backend_name());
            store
        }
        Err(e) => {
            log::error!("Failed to connect document store: {}", e);
            log::error!("Cannot start server without a working document store");
            std::process::exit(1);
        }
    };

    let host = app_settings.server.host.clone();
    let port = app_settings.server.port;
    let cors_origins = app_settings.server.cors_origins.clone();
    let state = AppState::new(app_settings, store);

    log::info!("Starting server at http://{}:{}", host, port);

    let listener = TcpListener::bind(format!("{}:{}", host, port))?;

    HttpServer::new(move || {
        // Permissive CORS without credentials
        let mut cors = Cors::default();
        if cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .configure(configure_app(state.clone()))
    })
    .listen(listener)?
    .run()
    .await
}
