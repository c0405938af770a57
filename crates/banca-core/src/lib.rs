//! # banca-core: Pure Business Logic for the Banca Client
//!
//! This crate is the **heart** of the Banca client. It contains all business
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Banca Client Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       UI Shell (any)                            │   │
//! │  │    Account pages ──► Shop pages ──► Forms ──► Admin screens     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                banca-client (REST + state)                      │   │
//! │  │    ApiClient, entity stores, paged views, session dispatch      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ banca-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│   │   │
//! │  │   │  Account  │  │   Money   │  │   Cart    │  │   + form  │   │   │
//! │  │   │  Product  │  │  (cents)  │  │ CartItem  │  │  composer │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                    ┌───────────┐                                │   │
//! │  │                    │   page    │                                │   │
//! │  │                    │ Page<T>   │                                │   │
//! │  │                    └───────────┘                                │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK DEPENDENCE IN TESTS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Account, Transaction, Product, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`page`] - Page envelope and page request for paginated listings
//! - [`validation`] - Field-level validators with stable error codes
//! - [`form`] - Form value graph and cross-field validator composition
//! - [`cart`] - Shopping cart and checkout feasibility gate
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64); the wire format
//!    converts at the edge
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod form;
pub mod money;
pub mod page;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use banca_core::Money` instead of
// `use banca_core::money::Money`

pub use cart::{Cart, CartItem};
pub use error::{CheckoutError, CoreError, ValidationError};
pub use form::Form;
pub use money::Money;
pub use page::{Page, PageRequest, SortDirection};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default page size for paginated account listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default page size for paginated transaction listings.
pub const TRANSACTIONS_PAGE_SIZE: u32 = 20;

/// Account numbers are 10 to 20 digits.
pub const ACCOUNT_NUMBER_MIN_DIGITS: usize = 10;
pub const ACCOUNT_NUMBER_MAX_DIGITS: usize = 20;

/// Minimum age to hold a customer profile.
pub const MIN_CUSTOMER_AGE: u32 = 18;

/// Minimum password length accepted at registration and password change.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum length of a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
