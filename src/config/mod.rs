pub mod settings;

use tracing::info;

pub use settings::{AppSettings, StoreBackend};

/// Initialize application configuration
pub fn init_config() -> Result<settings::AppSettings, crate::error::AppError> {
    info!("Initializing application configuration from environment");
    let config = settings::AppSettings::from_env()?;
    info!(backend = ?config.store.backend, port = config.server.port, "configuration loaded");
    Ok(config)
}
