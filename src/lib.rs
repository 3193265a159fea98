//! Hospital Management Server Library
//!
//! Modules shared by the server binary and the integration tests: document
//! store backends, repositories, billing and stats services, and the HTTP
//! handlers that expose them.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::AppError;
pub use models::runtime_config::AppState;
