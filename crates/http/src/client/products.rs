//! Product catalogue endpoints

use super::{AuthenticatedApiClient, ClientError};
use crate::types::{Product, ProductInput, ProductListResponse};
use reqwest::Method;

impl AuthenticatedApiClient {
    /// List products, optionally filtered by a search term
    pub async fn list_products(
        &self,
        search: Option<&str>,
    ) -> Result<ProductListResponse, ClientError> {
        let mut req = self.request(Method::GET, "/api/products");
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            req = req.query(&[("search", term)]);
        }
        self.execute(req).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ClientError> {
        let req = self.request(Method::GET, &format!("/api/products/{id}"));
        self.execute(req).await
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ClientError> {
        let req = self.request(Method::POST, "/api/products").json(input);
        self.execute(req).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        input: &ProductInput,
    ) -> Result<Product, ClientError> {
        let req = self
            .request(Method::PUT, &format!("/api/products/{id}"))
            .json(input);
        self.execute(req).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &format!("/api/products/{id}"));
        self.execute_empty(req).await
    }
}
