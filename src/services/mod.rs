pub mod auth_service;
pub mod billing_service;
pub mod stats_service;

pub use auth_service::AuthService;
pub use billing_service::BillingService;
pub use stats_service::StatsService;
