//! # Domain Types
//!
//! Core domain types exchanged with the banking/shop REST API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Banking                          Shop                                  │
//! │  ┌─────────────────┐              ┌─────────────────┐                   │
//! │  │    Account      │              │    Product      │                   │
//! │  │  ─────────────  │              │  ─────────────  │                   │
//! │  │  id             │              │  id             │                   │
//! │  │  accountNumber  │              │  price (Money)  │                   │
//! │  │  balance (Money)│              │  stock          │                   │
//! │  └─────────────────┘              └─────────────────┘                   │
//! │  ┌─────────────────┐              ┌─────────────────┐                   │
//! │  │  Transaction    │              │     Order       │                   │
//! │  │  DEPOSIT /      │              │  PENDING..      │                   │
//! │  │  WITHDRAW       │              │  CANCELLED      │                   │
//! │  └─────────────────┘              └─────────────────┘                   │
//! │                                                                         │
//! │  Customer (KYC profile) • Category • TransactionsByType (report row)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Conventions
//! - Field names are camelCase JSON
//! - Timestamps are ISO-8601 strings (`DateTime<Utc>`)
//! - Calendar dates are `YYYY-MM-DD` strings (`NaiveDate`)
//! - Amounts are plain JSON numbers, mapped to [`Money`](crate::money::Money)
//! - Identifiers are opaque strings, unique per collection

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Accounts
// =============================================================================

/// A bank account owned by the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier (opaque string).
    pub id: String,

    /// Business identifier, 10-20 digits.
    pub account_number: String,

    /// Display name of the owning customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Current balance. Read-only on the client; the authoritative mutation
    /// happens server-side when a transaction write succeeds.
    pub balance: Money,

    /// Whether the account accepts transactions.
    pub active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for opening an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub account_number: String,
    pub initial_balance: Money,
}

// =============================================================================
// Transactions
// =============================================================================

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

/// A settled deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_number: String,
    pub account_owner: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: Money,
    /// Account balance after this transaction settled.
    pub balance_after: Money,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Amount with the movement's sign: positive for deposits, negative for
    /// withdrawals. Used by listings that render +/- deltas.
    pub fn signed_amount(&self) -> Money {
        match self.tx_type {
            TransactionType::Deposit => self.amount,
            TransactionType::Withdraw => Money::zero() - self.amount,
        }
    }
}

/// Payload for creating a transaction (deposit or withdrawal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub account_number: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Products & Categories
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Money,
    /// Units available as of the last fetch. Checkout trusts this snapshot;
    /// the server re-checks on order placement.
    pub stock: i64,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Product can be added to the cart at all.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Catalog badge threshold ("last N units").
    #[inline]
    pub fn low_stock(&self) -> bool {
        self.stock > 0 && self.stock < 10
    }
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Money,
    pub stock: i64,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Orders
// =============================================================================

/// Order lifecycle state, advanced by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

/// A line of a placed order, as priced by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: Money,
    pub subtotal: Money,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    /// Settlement account the order was paid from.
    pub account_number: String,
    pub items: Vec<OrderItem>,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line of an order request: product + desired quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Payload for placing an order, settled from `account_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderItemRequest>,
    pub account_number: String,
}

// =============================================================================
// Customer Profile
// =============================================================================

/// KYC review state of a customer profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
}

/// The authenticated user's customer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    pub kyc_status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_documents: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for updating the customer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

// =============================================================================
// Reports
// =============================================================================

/// Aggregated transaction stats for one transaction type over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsByType {
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub count: i64,
    pub total_amount: Money,
    /// Share of all transactions in the range, 0-100.
    pub percentage: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_wire_shape() {
        let json = r#"{
            "id": "t1",
            "accountNumber": "1234567890",
            "accountOwner": "Maria Lopez",
            "type": "WITHDRAW",
            "amount": 150.75,
            "balanceAfter": 849.25,
            "timestamp": "2025-03-01T10:15:00Z",
            "description": "rent"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.tx_type, TransactionType::Withdraw);
        assert_eq!(tx.amount, Money::from_cents(15_075));
        assert_eq!(tx.signed_amount(), Money::from_cents(-15_075));
    }

    #[test]
    fn test_account_optional_customer_name() {
        let json = r#"{
            "id": "a1",
            "accountNumber": "1234567890",
            "balance": 100.0,
            "active": true,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.customer_name.is_none());
        assert_eq!(account.balance, Money::from_cents(10_000));
    }

    #[test]
    fn test_order_request_serialization() {
        let request = OrderRequest {
            items: vec![OrderItemRequest {
                product_id: "p1".to_string(),
                quantity: 2,
            }],
            account_number: "1234567890".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["items"][0]["productId"], "p1");
        assert_eq!(json["accountNumber"], "1234567890");
    }

    #[test]
    fn test_enum_wire_tags() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
        assert_eq!(
            serde_json::to_string(&KycStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        let tx: TransactionType = serde_json::from_str("\"DEPOSIT\"").unwrap();
        assert_eq!(tx, TransactionType::Deposit);
    }

    #[test]
    fn test_product_stock_helpers() {
        let mut product = sample_product();
        assert!(product.in_stock());
        assert!(product.low_stock());

        product.stock = 0;
        assert!(!product.in_stock());
        assert!(!product.low_stock());

        product.stock = 50;
        assert!(product.in_stock());
        assert!(!product.low_stock());
    }

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Teclado".to_string(),
            description: None,
            price: Money::from_cents(9_900),
            stock: 5,
            category_id: "c1".to_string(),
            category_name: None,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
