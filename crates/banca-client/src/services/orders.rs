//! # Order Service
//!
//! Order listing, admin status updates, and checkout from the cart.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Flow                                    │
//! │                                                                         │
//! │  checkout(cart, account, latest_products)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart.validate_checkout(account.balance, latest_products)               │
//! │       │                                                                 │
//! │       ├── gate fails ──► ClientError::Infeasible                        │
//! │       │                  (request never leaves the process,             │
//! │       │                   cart untouched)                               │
//! │       ▼                                                                 │
//! │  POST /orders { items, accountNumber }                                  │
//! │       │                                                                 │
//! │       ├── server rejects ──► ClientError::Server, cart untouched        │
//! │       │                      (stale stock/balance lands here)           │
//! │       ▼                                                                 │
//! │  Order received ──► cart.clear() ──► Ok(order)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use banca_core::{Account, Cart, Order, OrderRequest, OrderStatus, Product};
use serde::Serialize;
use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;

/// PUT /orders/{id}/status body.
#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

/// Service for the `/orders` resource.
#[derive(Debug, Clone)]
pub struct OrderService {
    api: ApiClient,
}

impl OrderService {
    pub(crate) fn new(api: ApiClient) -> Self {
        OrderService { api }
    }

    /// GET /orders - the current user's orders.
    pub async fn mine(&self) -> ClientResult<Vec<Order>> {
        self.api.get("orders").await
    }

    /// GET /orders/all - every order (admin).
    pub async fn all(&self) -> ClientResult<Vec<Order>> {
        self.api.get("orders/all").await
    }

    /// GET /orders/{id}
    pub async fn by_id(&self, id: &str) -> ClientResult<Order> {
        self.api.get(&format!("orders/{}", id)).await
    }

    /// POST /orders - places a pre-built order request.
    pub async fn create(&self, request: &OrderRequest) -> ClientResult<Order> {
        self.api.post("orders", request).await
    }

    /// PUT /orders/{id}/status - advances the lifecycle (admin).
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        self.api
            .put(&format!("orders/{}/status", id), &StatusUpdate { status })
            .await
    }

    /// DELETE /orders/{id} - cancels an order.
    pub async fn cancel(&self, id: &str) -> ClientResult<()> {
        self.api.delete(&format!("orders/{}", id)).await
    }

    /// Checks out the cart against the chosen settlement account.
    ///
    /// Runs the client-side feasibility gate first: a gate failure returns
    /// without any network traffic. On a successful placement the cart is
    /// cleared; on any failure it is left untouched so the user can adjust
    /// and retry.
    ///
    /// `latest_products` is the freshest catalog fetch the caller has; the
    /// stock check trusts it (and only it) per the trust-last-snapshot
    /// policy.
    pub async fn checkout(
        &self,
        cart: &mut Cart,
        account: &Account,
        latest_products: &[Product],
    ) -> ClientResult<Order> {
        cart.validate_checkout(account.balance, latest_products)?;

        let request = cart.order_request(&account.account_number);
        debug!(
            lines = request.items.len(),
            account = %request.account_number,
            "placing order"
        );
        let order: Order = self.api.post("orders", &request).await?;
        cart.clear();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use banca_core::error::CheckoutError;
    use banca_core::Money;
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

    fn account(balance_cents: i64) -> Account {
        Account {
            id: "a1".to_string(),
            account_number: "1234567890".to_string(),
            customer_name: None,
            balance: Money::from_cents(balance_cents),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_value(StatusUpdate {
            status: OrderStatus::Confirmed,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "CONFIRMED" }));
    }

    #[tokio::test]
    async fn test_checkout_gate_failure_leaves_cart_untouched() {
        let service = OrderService::new(ApiClient::new(&ClientConfig::default()).unwrap());

        let mut cart = Cart::new();
        cart.add_item(&product("p1", 1000, 10), 2);

        // Balance covers nothing: the gate trips before any request is made
        let err = service
            .checkout(&mut cart, &account(500), &[product("p1", 1000, 10)])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Infeasible(CheckoutError::InsufficientFunds { .. })
        ));
        assert_eq!(cart.item_count(), 2);
    }
}
