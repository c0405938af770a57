//! # Product Service
//!
//! Catalog CRUD. Stateless: catalog pages keep their own local list and the
//! cart freezes its own product snapshots, so no shared store is needed.

use banca_core::{Product, ProductRequest};

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Service for the `/products` resource.
#[derive(Debug, Clone)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub(crate) fn new(api: ApiClient) -> Self {
        ProductService { api }
    }

    /// GET /products - the whole catalog.
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.api.get("products").await
    }

    /// GET /products/category/{categoryId}
    pub async fn by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.api
            .get(&format!("products/category/{}", category_id))
            .await
    }

    /// GET /products/{id}
    pub async fn by_id(&self, id: &str) -> ClientResult<Product> {
        self.api.get(&format!("products/{}", id)).await
    }

    /// POST /products (admin)
    pub async fn create(&self, request: &ProductRequest) -> ClientResult<Product> {
        self.api.post("products", request).await
    }

    /// PUT /products/{id} (admin)
    pub async fn update(&self, id: &str, request: &ProductRequest) -> ClientResult<Product> {
        self.api.put(&format!("products/{}", id), request).await
    }

    /// DELETE /products/{id} (admin)
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(&format!("products/{}", id)).await
    }
}
