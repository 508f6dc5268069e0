//! ShopDash single-page admin client
//!
//! A Yew application with a login view, a dashboard and a products view.
//! Protected routes sit behind a navigation guard that validates the stored
//! bearer token and its expiry record before rendering.

pub mod app;
pub mod auth;
pub mod client;
pub mod client_wrapper;
pub mod components;
pub mod config;
pub mod logging;
pub mod router;
pub mod services;
pub mod views;

pub use app::App;
pub use auth::AuthContext;
pub use client::{create_authenticated_client, create_public_client};
pub use config::AppConfig;
pub use router::Route;
