//! # banca-client: REST Client and Shared State for the Banca Client
//!
//! Everything between the UI shell and the remote REST API: a typed HTTP
//! client, per-resource services, shared entity stores, paginated view
//! state, and the session/error dispatcher.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request/State Round Trip                           │
//! │                                                                         │
//! │  page/component                                                         │
//! │       │  asks a service                                                 │
//! │       ▼                                                                 │
//! │  AccountService::my_accounts()                                          │
//! │       │  GET /accounts  (ApiClient)                                     │
//! │       ▼                                                                 │
//! │  ┌─────────────┐   success    ┌─────────────────────────────┐           │
//! │  │ remote call │─────────────►│ store.set_all(response)     │           │
//! │  │ (async)     │              │ (only the owning call       │           │
//! │  └──────┬──────┘              │  writes, after success)     │           │
//! │         │ failure             └─────────────────────────────┘           │
//! │         ▼                                                               │
//! │  ClientError ──► Session::dispatch_error ──► user-visible message       │
//! │                   (401 → logout + /login, 403 → /)                      │
//! │                                                                         │
//! │  Store state is NEVER touched by a pending or failed call.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Client configuration (API base URL, timeout, page size)
//! - [`http`] - Typed request issuing and error envelope decoding
//! - [`session`] - Current user, logout, navigation side effects
//! - [`store`] - Shared entity stores (read-only outside this crate)
//! - [`paging`] - Paginated view state machine (loading flag, search mode)
//! - [`services`] - One service per REST resource
//! - [`error`] - Client error taxonomy

pub mod config;
pub mod error;
pub mod http;
pub mod paging;
pub mod services;
pub mod session;
pub mod store;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorResponse};
pub use http::ApiClient;
pub use paging::PagedView;
pub use session::{CurrentUser, Navigator, Role, Session};
pub use store::{Entity, Store};

use services::{
    AccountService, CategoryService, CustomerService, OrderService, ProductService,
    ReportService, TransactionService,
};

// =============================================================================
// Client Facade
// =============================================================================

/// One handle bundling every resource service over a shared [`ApiClient`].
///
/// Services are cheap to clone and share their stores, so components can
/// either keep the facade around or clone individual services out of it.
///
/// ## Usage
/// ```rust,no_run
/// use banca_client::{BancaClient, ClientConfig};
///
/// # async fn run() -> banca_client::ClientResult<()> {
/// let client = BancaClient::new(&ClientConfig::default())?;
/// let accounts = client.accounts().my_accounts().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BancaClient {
    accounts: AccountService,
    transactions: TransactionService,
    products: ProductService,
    categories: CategoryService,
    orders: OrderService,
    customer: CustomerService,
    reports: ReportService,
}

impl BancaClient {
    /// Builds every service over one HTTP client configured from `config`.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::new(config)?;
        Ok(BancaClient {
            accounts: AccountService::new(api.clone()),
            transactions: TransactionService::new(api.clone()),
            products: ProductService::new(api.clone()),
            categories: CategoryService::new(api.clone()),
            orders: OrderService::new(api.clone()),
            customer: CustomerService::new(api.clone()),
            reports: ReportService::new(api),
        })
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn transactions(&self) -> &TransactionService {
        &self.transactions
    }

    pub fn products(&self) -> &ProductService {
        &self.products
    }

    pub fn categories(&self) -> &CategoryService {
        &self.categories
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    pub fn customer(&self) -> &CustomerService {
        &self.customer
    }

    pub fn reports(&self) -> &ReportService {
        &self.reports
    }
}
