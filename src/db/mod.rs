pub mod connection;
pub mod document_store;
pub mod memory_store;
pub mod postgres_store;
pub mod repositories;

// Re-export the connection module's functions for ease of use
pub use connection::{connect_store, create_pool, verify_connection};
pub use document_store::{Document, DocumentStore, Filter, StoreError};
pub use memory_store::MemoryDocumentStore;
pub use postgres_store::PgDocumentStore;
pub use repositories::*;
