//! # Category Service
//!
//! Category CRUD for the admin screens and the catalog filter.

use banca_core::{Category, CategoryRequest};

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Service for the `/categories` resource.
#[derive(Debug, Clone)]
pub struct CategoryService {
    api: ApiClient,
}

impl CategoryService {
    pub(crate) fn new(api: ApiClient) -> Self {
        CategoryService { api }
    }

    /// GET /categories
    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        self.api.get("categories").await
    }

    /// GET /categories/{id}
    pub async fn by_id(&self, id: &str) -> ClientResult<Category> {
        self.api.get(&format!("categories/{}", id)).await
    }

    /// POST /categories (admin)
    pub async fn create(&self, request: &CategoryRequest) -> ClientResult<Category> {
        self.api.post("categories", request).await
    }

    /// PUT /categories/{id} (admin)
    pub async fn update(&self, id: &str, request: &CategoryRequest) -> ClientResult<Category> {
        self.api.put(&format!("categories/{}", id), request).await
    }

    /// DELETE /categories/{id} (admin)
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(&format!("categories/{}", id)).await
    }
}
