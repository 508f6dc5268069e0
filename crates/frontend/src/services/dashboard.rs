//! Dashboard service

use crate::client::{create_authenticated_client, ClientError};
use shopdash_http::types::DashboardStats;

#[derive(Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub async fn stats(&self) -> Result<DashboardStats, ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
        client.dashboard_stats().await
    }
}
