//! ShopDash HTTP client
//!
//! Wire types shared with the ShopDash API plus typed clients that keep
//! public and bearer-authenticated requests apart at compile time.

pub mod types;

#[cfg(feature = "client")]
pub mod client;
