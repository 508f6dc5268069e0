//! Product catalogue service

use crate::client::{create_authenticated_client, ClientError};
use crate::client_wrapper::WrappedAuthClient;
use shopdash_http::types::{Product, ProductInput, ProductListResponse};

#[derive(Clone)]
pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        Self
    }

    fn client(&self) -> Result<WrappedAuthClient, ClientError> {
        create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))
    }

    /// List products, filtered by `search` when it is non-empty
    pub async fn list(&self, search: Option<String>) -> Result<ProductListResponse, ClientError> {
        self.client()?.list_products(search.as_deref()).await
    }

    pub async fn get(&self, id: &str) -> Result<Product, ClientError> {
        self.client()?.get_product(id).await
    }

    pub async fn create(&self, input: ProductInput) -> Result<Product, ClientError> {
        validate(&input)?;
        self.client()?.create_product(&input).await
    }

    pub async fn update(&self, id: &str, input: ProductInput) -> Result<Product, ClientError> {
        validate(&input)?;
        self.client()?.update_product(id, &input).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client()?.delete_product(id).await
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject obviously invalid input before it reaches the API
fn validate(input: &ProductInput) -> Result<(), ClientError> {
    if input.name.trim().is_empty() {
        return Err(ClientError::BadRequest("Product name is required".into()));
    }
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(ClientError::BadRequest(
            "Price must be a non-negative number".into(),
        ));
    }
    Ok(())
}
