use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

use crate::config::settings::{StoreBackend, StoreConfig};
use crate::db::document_store::DocumentStore;
use crate::db::memory_store::MemoryDocumentStore;
use crate::db::postgres_store::PgDocumentStore;
use crate::error::AppError;

/// Creates a PostgreSQL connection pool for the configured database URL.
///
/// Retries a few times with a growing delay before giving up, so the server
/// can start alongside a database container that is still booting.
pub async fn create_pool(config: &StoreConfig) -> Result<PgPool, AppError> {
    let database_url = config
        .url
        .as_deref()
        .ok_or_else(|| AppError::Configuration("DATABASE_URL must be set in environment variables".to_string()))?;

    log::info!("Creating database connection pool");

    let max_retries = 3;
    let mut last_error = None;

    for attempt in 1..=max_retries {
        log::info!("Database connection attempt {} of {}", attempt, max_retries);

        match PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(60))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                log::info!("Successfully connected to database");
                return Ok(pool);
            }
            Err(e) => {
                log::warn!("Database connection attempt {} failed: {}", attempt, e);

                if e.to_string().contains("authentication failed") {
                    log::error!("Database authentication failed. Please check your DATABASE_URL credentials.");
                    return Err(AppError::Database(e.to_string()));
                }

                if e.to_string().contains("Connection refused") {
                    log::error!("Database connection refused. Please check if the database server is running and accessible.");
                }

                last_error = Some(e);

                if attempt < max_retries {
                    let delay = Duration::from_secs(2 * attempt as u64);
                    log::info!("Retrying in {} seconds...", delay.as_secs());
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    let error = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "Unknown database connection error".to_string());

    log::error!("All database connection attempts failed: {}", error);
    Err(AppError::Database(error))
}

/// Verifies the database connection by executing a simple query.
pub async fn verify_connection(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query_as::<_, (i32,)>("SELECT 1 as result")
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database connection verification failed: {}", e);
            AppError::Database(e.to_string())
        })?;

    log::info!("Database connection verified successfully");
    Ok(())
}

/// Builds the document store selected by configuration.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, AppError> {
    match config.backend {
        StoreBackend::Memory => {
            log::warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = create_pool(config).await?;
            verify_connection(&pool).await?;
            let store = PgDocumentStore::new(pool);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> StoreConfig {
        StoreConfig {
            backend: StoreBackend::Memory,
            url: None,
            name: None,
            max_connections: 1,
        }
    }

    #[tokio::test]
    async fn test_connect_memory_store() {
        let store = connect_store(&memory_config()).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_pool_requires_url() {
        let config = StoreConfig {
            backend: StoreBackend::Postgres,
            ..memory_config()
        };
        assert!(matches!(create_pool(&config).await, Err(AppError::Configuration(_))));
    }
}
