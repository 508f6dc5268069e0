//! ShopDash HTTP client

pub mod auth;
pub mod error;
pub mod products;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedApiClient, PublicApiClient, TypedClientBuilder};
