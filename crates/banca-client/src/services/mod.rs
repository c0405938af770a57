//! # Resource Services
//!
//! One service per REST resource. Account and transaction services own
//! shared entity stores; the rest are stateless wrappers around the HTTP
//! verbs, exactly as thin as the endpoints they front.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Service                 Store   Endpoints                              │
//! │  ──────────────────────  ─────   ─────────────────────────────────────  │
//! │  AccountService          yes     /accounts, /accounts/number/{n}, ...   │
//! │  TransactionService      yes     /transactions, date-range pagination   │
//! │  ProductService          no      /products CRUD                         │
//! │  CategoryService         no      /categories CRUD                       │
//! │  OrderService            no      /orders, checkout from the cart        │
//! │  CustomerService         no      /customer/profile                      │
//! │  ReportService           no      /reports/transactions/by-type          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod accounts;
mod categories;
mod customer;
mod orders;
mod products;
mod reports;
mod transactions;

pub use accounts::AccountService;
pub use categories::CategoryService;
pub use customer::CustomerService;
pub use orders::OrderService;
pub use products::ProductService;
pub use reports::ReportService;
pub use transactions::TransactionService;
