//! Authentication and account endpoints

use super::{AuthenticatedApiClient, ClientError, PublicApiClient};
use crate::types::{DashboardStats, LoginRequest, LoginResponse, UserProfile};
use reqwest::Method;

impl PublicApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/api/auth/login").json(request);
        self.execute(req).await
    }
}

impl AuthenticatedApiClient {
    /// Profile of the user owning the token
    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let req = self.request(Method::GET, "/api/auth/me");
        self.execute(req).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let req = self.request(Method::GET, "/api/dashboard/stats");
        self.execute(req).await
    }
}
