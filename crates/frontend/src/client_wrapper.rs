//! Wrapped client that handles auth errors automatically

use crate::auth::error_handler::trigger_auth_error;
use crate::auth::{LocalTokenStore, TokenStore};
use shopdash_http::client::{AuthenticatedApiClient, ClientError};
use shopdash_http::types::{DashboardStats, Product, ProductInput, ProductListResponse, UserProfile};

/// Report a rejected token to the auth provider.
///
/// Without a registered provider the credentials in `fallback` are cleared
/// directly so the next navigation is sent to the login view.
pub(crate) fn report_unauthorized(fallback: &dyn TokenStore) {
    if !trigger_auth_error() {
        tracing::warn!("No auth provider mounted, clearing stored credentials");
        fallback.clear();
    }
}

/// Wrapper around [`AuthenticatedApiClient`] that reports rejected tokens.
///
/// A 401 from any call fires the global auth error handler, which ends the
/// session and sends the user back to the login view, or clears the stored
/// credentials when no provider is mounted. The error is still returned to
/// the caller.
#[derive(Clone)]
pub struct WrappedAuthClient {
    inner: AuthenticatedApiClient,
}

impl WrappedAuthClient {
    pub fn new(client: AuthenticatedApiClient) -> Self {
        Self { inner: client }
    }

    pub fn token(&self) -> &str {
        self.inner.token()
    }

    fn observe<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(error) = &result {
            if error.is_unauthorized() {
                tracing::warn!("API rejected the session token: {error}");
                report_unauthorized(&LocalTokenStore);
            }
        }
        result
    }

    /// Execute a request and handle auth errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = self.inner.execute(request).await;
        self.observe(result)
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, path)
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let result = self.inner.me().await;
        self.observe(result)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let result = self.inner.dashboard_stats().await;
        self.observe(result)
    }

    pub async fn list_products(
        &self,
        search: Option<&str>,
    ) -> Result<ProductListResponse, ClientError> {
        let result = self.inner.list_products(search).await;
        self.observe(result)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ClientError> {
        let result = self.inner.get_product(id).await;
        self.observe(result)
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ClientError> {
        let result = self.inner.create_product(input).await;
        self.observe(result)
    }

    pub async fn update_product(
        &self,
        id: &str,
        input: &ProductInput,
    ) -> Result<Product, ClientError> {
        let result = self.inner.update_product(id, input).await;
        self.observe(result)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ClientError> {
        let result = self.inner.delete_product(id).await;
        self.observe(result)
    }

    /// Get a reference to the inner client (use sparingly - prefer wrapped methods)
    pub fn inner(&self) -> &AuthenticatedApiClient {
        &self.inner
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::auth::error_handler::{clear_auth_error_callback, set_auth_error_callback};
    use crate::auth::{MemoryTokenStore, TokenExpiryRecord};
    use crate::config::AppConfig;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn wrapped(uri: String, token: &str) -> WrappedAuthClient {
        WrappedAuthClient::new(AuthenticatedApiClient::new(uri, token).unwrap())
    }

    #[tokio::test]
    async fn unauthorized_response_fires_auth_error_handler() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard/stats"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
            .mount(&mock_server)
            .await;

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        set_auth_error_callback(Rc::new(move || flag.set(true)));

        let client = wrapped(mock_server.uri(), "stale");
        let result = client.dashboard_stats().await;

        assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
        assert!(fired.get());
        clear_auth_error_callback();
    }

    #[tokio::test]
    async fn other_errors_leave_session_alone() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/products/p1"))
            .and(header("authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(403).set_body_string("read only"))
            .mount(&mock_server)
            .await;

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        set_auth_error_callback(Rc::new(move || flag.set(true)));

        let client = wrapped(mock_server.uri(), "good");
        let result = client.delete_product("p1").await;

        assert!(matches!(result, Err(ClientError::Forbidden(_))));
        assert!(!fired.get());
        clear_auth_error_callback();
    }

    #[tokio::test]
    async fn execute_passes_through_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "username": "ada"
            })))
            .mount(&mock_server)
            .await;

        let client = wrapped(mock_server.uri(), "good");
        let me: UserProfile = client
            .execute(client.request(reqwest::Method::GET, "/api/auth/me"))
            .await
            .unwrap();
        assert_eq!(me.username, "ada");
    }

    fn stored_session() -> MemoryTokenStore {
        let store = MemoryTokenStore::new();
        store
            .save("stale", Some(&TokenExpiryRecord::from_ttl(0, 3600)))
            .unwrap();
        store
    }

    #[test]
    fn unauthorized_with_provider_leaves_storage_to_it() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        set_auth_error_callback(Rc::new(move || flag.set(true)));

        let store = stored_session();
        report_unauthorized(&store);

        assert!(fired.get());
        assert!(store.contains(AppConfig::TOKEN_KEY));
        clear_auth_error_callback();
    }

    #[test]
    fn unauthorized_without_provider_clears_storage() {
        clear_auth_error_callback();

        let store = stored_session();
        report_unauthorized(&store);

        assert!(store.token().is_none());
        assert!(!store.contains(AppConfig::TOKEN_EXPIRY_KEY));
    }
}
