//! Top-level views, one per route

mod dashboard;
mod login;
mod not_found;
mod products;

pub use dashboard::DashboardView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use products::ProductsView;
