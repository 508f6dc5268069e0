//! Authentication module

pub mod context;
pub mod error_handler;
pub mod store;
pub mod token;

// Re-export commonly used items
pub use context::{
    use_auth, use_is_authenticated, use_session, AuthAction, AuthContext, AuthProvider, Session,
};
pub use store::{valid_token, LocalTokenStore, MemoryTokenStore, TokenStore};
pub use token::TokenExpiryRecord;
