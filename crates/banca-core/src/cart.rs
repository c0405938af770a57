//! # Cart Module
//!
//! In-memory shopping cart and the client-side checkout feasibility gate.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────┐     ┌──────────┐      │
//! │  │  Empty   │────►│  Lines   │────►│ Feasibility│────►│  Order   │      │
//! │  │  Cart    │     │ in cart  │     │    gate    │     │  placed  │      │
//! │  └──────────┘     └──────────┘     └────────────┘     └──────────┘      │
//! │        ▲               │                  │                 │           │
//! │        │          add_item           balance ≥ total        │           │
//! │        │          set_quantity       qty ≤ last stock       │           │
//! │        │          remove_item                               │           │
//! │        └──────────────── clear ◄────────────────────────────┘           │
//! │                          (only after the order succeeded)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Snapshots
//! A line item freezes the product at add time. Server-side price changes
//! after that never retroactively change the cart total. Stock, on the other
//! hand, is checked against the *latest fetched* product list at the gate -
//! the cart's own snapshot is only the fallback when a product vanished from
//! the listing. A stale snapshot can still let an infeasible order through;
//! the server is the final arbiter and rejects it.

use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;
use crate::money::Money;
use crate::types::{OrderItemRequest, OrderRequest, Product};

// =============================================================================
// Cart Item
// =============================================================================

/// A (product snapshot, quantity) pair.
///
/// ## Invariants
/// - `quantity >= 1` while the line exists; a quantity update to <= 0
///   removes the line entirely
/// - At most one line per product id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product as it looked when added (price frozen).
    pub product: Product,
    pub quantity: i64,
}

impl CartItem {
    /// Line total: frozen unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart. Process-lifetime only, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart or increases the existing line's quantity.
    ///
    /// No upper bound is enforced here; the feasibility gate checks stock at
    /// checkout time.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
            return;
        }
        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
    }

    /// Replaces a line's quantity; `quantity <= 0` removes the line
    /// (idempotent with [`remove_item`](Cart::remove_item)).
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line by product id. Silent when the line does not exist.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Sum of frozen line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// The client-side feasibility gate, evaluated before submission.
    ///
    /// ## Checks
    /// 1. The cart has at least one line
    /// 2. The settlement account balance covers the cart total
    /// 3. No line's quantity exceeds the product's stock as last fetched
    ///    (`latest`); a product missing from `latest` falls back to the
    ///    stock frozen in its snapshot
    ///
    /// Stale-data races (stock or balance changed server-side since the last
    /// fetch) are not detected here; the server rejects such an order and
    /// the rejection surfaces as a client error.
    pub fn validate_checkout(
        &self,
        balance: Money,
        latest: &[Product],
    ) -> Result<(), CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let required = self.total();
        if balance < required {
            return Err(CheckoutError::InsufficientFunds {
                available: balance,
                required,
            });
        }

        for item in &self.items {
            let available = latest
                .iter()
                .find(|p| p.id == item.product.id)
                .map(|p| p.stock)
                .unwrap_or(item.product.stock);
            if item.quantity > available {
                return Err(CheckoutError::InsufficientStock {
                    product_id: item.product.id.clone(),
                    name: item.product.name.clone(),
                    available,
                    requested: item.quantity,
                });
            }
        }

        Ok(())
    }

    /// Builds the order payload from the current lines.
    pub fn order_request(&self, account_number: &str) -> OrderRequest {
        OrderRequest {
            items: self
                .items
                .iter()
                .map(|item| OrderItemRequest {
                    product_id: item.product.id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            account_number: account_number.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: None,
            price: Money::from_cents(price_cents),
            stock,
            category_id: "c1".to_string(),
            category_name: None,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let mut cart = Cart::new();
        let p = product("a", 1000, 10);

        cart.add_item(&p, 2);
        cart.add_item(&p, 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.line("a").unwrap().quantity, 5);
    }

    #[test]
    fn test_totals_scenario() {
        // Product A $10.00 × 2, product B $5.50 × 1 → $25.50, 3 items
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000, 10), 2);
        cart.add_item(&product("b", 550, 10), 1);

        assert_eq!(cart.total(), Money::from_cents(2550));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_invariant_under_add_order() {
        let a = product("a", 1000, 10);
        let b = product("b", 550, 10);

        let mut first = Cart::new();
        first.add_item(&a, 2);
        first.add_item(&b, 1);

        let mut second = Cart::new();
        second.add_item(&b, 1);
        second.add_item(&a, 2);

        assert_eq!(first.total(), second.total());
        assert_eq!(first.item_count(), second.item_count());
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000, 10), 2);

        cart.set_quantity("a", 0);
        assert!(cart.is_empty());

        cart.add_item(&product("a", 1000, 10), 2);
        cart.set_quantity("a", -3);
        assert!(cart.is_empty());

        // Idempotent with remove_item
        cart.remove_item("a");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut p = product("a", 1000, 10);
        cart.add_item(&p, 1);

        // Server-side price change after adding
        p.price = Money::from_cents(99_999);
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_checkout_gate_insufficient_funds() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000, 10), 2);

        let err = cart
            .validate_checkout(Money::from_cents(1999), &[product("a", 1000, 10)])
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientFunds {
                available: Money::from_cents(1999),
                required: Money::from_cents(2000),
            }
        );

        // Exact balance passes
        assert!(cart
            .validate_checkout(Money::from_cents(2000), &[product("a", 1000, 10)])
            .is_ok());
    }

    #[test]
    fn test_checkout_gate_uses_latest_stock() {
        let mut cart = Cart::new();
        // Snapshot said 10 in stock
        cart.add_item(&product("a", 1000, 10), 5);

        // Latest fetch says only 3 left
        let err = cart
            .validate_checkout(Money::from_cents(100_000), &[product("a", 1000, 3)])
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            }
        ));

        // Product gone from the latest listing: the snapshot is all we have
        assert!(cart
            .validate_checkout(Money::from_cents(100_000), &[])
            .is_ok());
    }

    #[test]
    fn test_checkout_gate_empty_cart() {
        let cart = Cart::new();
        assert_eq!(
            cart.validate_checkout(Money::from_cents(100_000), &[]),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_order_request_mapping() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000, 10), 2);
        cart.add_item(&product("b", 550, 10), 1);

        let request = cart.order_request("1234567890");
        assert_eq!(request.account_number, "1234567890");
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].product_id, "a");
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(request.items[1].product_id, "b");
    }
}
