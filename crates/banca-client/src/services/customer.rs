//! # Customer Service
//!
//! The authenticated user's KYC profile.

use banca_core::{Customer, CustomerRequest};

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Service for the `/customer` resource.
#[derive(Debug, Clone)]
pub struct CustomerService {
    api: ApiClient,
}

impl CustomerService {
    pub(crate) fn new(api: ApiClient) -> Self {
        CustomerService { api }
    }

    /// GET /customer/profile - the current user's profile.
    pub async fn profile(&self) -> ClientResult<Customer> {
        self.api.get("customer/profile").await
    }

    /// PUT /customer/profile - updates the current user's profile.
    pub async fn update_profile(&self, request: &CustomerRequest) -> ClientResult<Customer> {
        self.api.put("customer/profile", request).await
    }
}
