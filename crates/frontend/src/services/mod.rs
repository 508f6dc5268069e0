//! Service modules for API interactions

pub mod auth;
pub mod dashboard;
pub mod products;

pub use auth::AuthApiService;
pub use dashboard::DashboardService;
pub use products::ProductService;
