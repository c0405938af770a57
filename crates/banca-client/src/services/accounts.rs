//! # Account Service
//!
//! REST operations for bank accounts, backed by the shared account store.
//!
//! ## Store Contract
//! - List fetches (`my_accounts`, `active_accounts`) replace the store
//!   wholesale on success
//! - `create` appends the server's response
//! - `activate`/`deactivate` replace the matching entry in place
//! - Single-entity lookups (`by_id`, `by_number`, `balance`) do not touch
//!   the store; they feed detail views and search mode
//! - Failures leave the store exactly as it was

use banca_core::page::{Page, PageRequest};
use banca_core::{Account, AccountRequest};
use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::store::Store;

/// Service for the `/accounts` resource.
#[derive(Debug, Clone)]
pub struct AccountService {
    api: ApiClient,
    store: Store<Account>,
}

impl AccountService {
    pub(crate) fn new(api: ApiClient) -> Self {
        AccountService {
            api,
            store: Store::new(),
        }
    }

    /// Read-only handle to the shared account collection.
    pub fn store(&self) -> Store<Account> {
        self.store.clone()
    }

    /// GET /accounts - the current user's accounts; replaces the store.
    pub async fn my_accounts(&self) -> ClientResult<Vec<Account>> {
        let accounts: Vec<Account> = self.api.get("accounts").await?;
        debug!(count = accounts.len(), "accounts fetched");
        self.store.set_all(accounts.clone());
        Ok(accounts)
    }

    /// GET /accounts/active - only active accounts; replaces the store.
    pub async fn active_accounts(&self) -> ClientResult<Vec<Account>> {
        let accounts: Vec<Account> = self.api.get("accounts/active").await?;
        self.store.set_all(accounts.clone());
        Ok(accounts)
    }

    /// GET /accounts/{id}
    pub async fn by_id(&self, id: &str) -> ClientResult<Account> {
        self.api.get(&format!("accounts/{}", id)).await
    }

    /// GET /accounts/number/{accountNumber} - exact lookup, also used by
    /// the paginated listing's search mode.
    pub async fn by_number(&self, account_number: &str) -> ClientResult<Account> {
        self.api
            .get(&format!("accounts/number/{}", account_number))
            .await
    }

    /// GET /accounts/number/{accountNumber}/balance - the account with a
    /// fresh balance snapshot.
    pub async fn balance(&self, account_number: &str) -> ClientResult<Account> {
        self.api
            .get(&format!("accounts/number/{}/balance", account_number))
            .await
    }

    /// POST /accounts - opens an account; appends the response to the store.
    pub async fn create(&self, request: &AccountRequest) -> ClientResult<Account> {
        let account: Account = self.api.post("accounts", request).await?;
        debug!(id = %account.id, "account created");
        self.store.push(account.clone());
        Ok(account)
    }

    /// PATCH /accounts/{id}/activate - replaces the entry in place.
    pub async fn activate(&self, id: &str) -> ClientResult<Account> {
        let account: Account = self.api.patch(&format!("accounts/{}/activate", id)).await?;
        self.store.replace(account.clone());
        Ok(account)
    }

    /// PATCH /accounts/{id}/deactivate - replaces the entry in place.
    pub async fn deactivate(&self, id: &str) -> ClientResult<Account> {
        let account: Account = self
            .api
            .patch(&format!("accounts/{}/deactivate", id))
            .await?;
        self.store.replace(account.clone());
        Ok(account)
    }

    /// GET /accounts/paginated - one page of the account listing.
    pub async fn paginated(&self, request: &PageRequest) -> ClientResult<Page<Account>> {
        self.api
            .get_with_query("accounts/paginated", &request.query_params())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_store_is_shared_across_clones() {
        let api = ApiClient::new(&ClientConfig::default()).unwrap();
        let service = AccountService::new(api);
        let cloned = service.clone();

        // Same underlying collection: a handle from either sees both empty
        assert!(service.store().is_empty());
        assert!(cloned.store().is_empty());
        service.store.set_all(Vec::new());
        assert_eq!(service.store().len(), cloned.store().len());
    }
}
