//! Authentication API service

use crate::client::{create_authenticated_client, create_public_client, ClientError};
use shopdash_http::types::{LoginRequest, LoginResponse, UserProfile};

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    pub fn new() -> Self {
        Self
    }

    /// Exchange credentials for a token
    pub async fn login(
        &self,
        username: String,
        password: String,
    ) -> Result<LoginResponse, ClientError> {
        let client = create_public_client()?;
        client.login(&LoginRequest { username, password }).await
    }

    /// Profile of the signed-in user
    pub async fn current_user(&self) -> Result<UserProfile, ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
        client.me().await
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
