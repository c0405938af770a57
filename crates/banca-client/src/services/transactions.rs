//! # Transaction Service
//!
//! Deposits, withdrawals and transaction listings, backed by the shared
//! transaction store. Date-range filtered pagination lives here because
//! transactions are the one resource filtered by time.

use banca_core::page::{DateRange, Page, PageRequest};
use banca_core::{Money, Transaction, TransactionRequest, TransactionType};
use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::store::Store;

/// Service for the `/transactions` resource.
#[derive(Debug, Clone)]
pub struct TransactionService {
    api: ApiClient,
    store: Store<Transaction>,
}

impl TransactionService {
    pub(crate) fn new(api: ApiClient) -> Self {
        TransactionService {
            api,
            store: Store::new(),
        }
    }

    /// Read-only handle to the shared transaction collection.
    pub fn store(&self) -> Store<Transaction> {
        self.store.clone()
    }

    /// GET /transactions - the current user's transactions; replaces the
    /// store.
    pub async fn my_transactions(&self) -> ClientResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self.api.get("transactions").await?;
        debug!(count = transactions.len(), "transactions fetched");
        self.store.set_all(transactions.clone());
        Ok(transactions)
    }

    /// GET /transactions/{id}
    pub async fn by_id(&self, id: &str) -> ClientResult<Transaction> {
        self.api.get(&format!("transactions/{}", id)).await
    }

    /// GET /transactions/account/{accountNumber} - one account's movement
    /// history; replaces the store.
    pub async fn by_account(&self, account_number: &str) -> ClientResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self
            .api
            .get(&format!("transactions/account/{}", account_number))
            .await?;
        self.store.set_all(transactions.clone());
        Ok(transactions)
    }

    /// POST /transactions - settles a deposit or withdrawal; appends the
    /// response to the store.
    pub async fn create(&self, request: &TransactionRequest) -> ClientResult<Transaction> {
        let transaction: Transaction = self.api.post("transactions", request).await?;
        debug!(id = %transaction.id, "transaction settled");
        self.store.push(transaction.clone());
        Ok(transaction)
    }

    /// Deposits `amount` into the account.
    pub async fn deposit(
        &self,
        account_number: &str,
        amount: Money,
        description: Option<String>,
    ) -> ClientResult<Transaction> {
        self.create(&Self::request(
            account_number,
            TransactionType::Deposit,
            amount,
            description,
        ))
        .await
    }

    /// Withdraws `amount` from the account. The insufficient-funds form
    /// rule gates this client-side; the server still has the final word.
    pub async fn withdraw(
        &self,
        account_number: &str,
        amount: Money,
        description: Option<String>,
    ) -> ClientResult<Transaction> {
        self.create(&Self::request(
            account_number,
            TransactionType::Withdraw,
            amount,
            description,
        ))
        .await
    }

    /// GET /transactions/paginated - one page of the listing.
    pub async fn paginated(&self, request: &PageRequest) -> ClientResult<Page<Transaction>> {
        self.api
            .get_with_query("transactions/paginated", &request.query_params())
            .await
    }

    /// GET /transactions/paginated with startDate/endDate - one page of a
    /// date-filtered listing.
    pub async fn by_date_range_paginated(
        &self,
        range: &DateRange,
        request: &PageRequest,
    ) -> ClientResult<Page<Transaction>> {
        let mut query = request.query_params();
        query.extend(range.query_params());
        self.api
            .get_with_query("transactions/paginated", &query)
            .await
    }

    fn request(
        account_number: &str,
        tx_type: TransactionType,
        amount: Money,
        description: Option<String>,
    ) -> TransactionRequest {
        TransactionRequest {
            account_number: account_number.to_string(),
            tx_type,
            amount,
            description,
        }
    }
}
