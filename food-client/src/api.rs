//! Typed endpoints of the ordering backend
//!
//! Each method is exactly one round trip through the [`HttpClient`]
//! transport. No retries and no caching: every call hits the backend.

use crate::{ClientResult, HttpClient};
use shared::{
    Ack, AddPaymentMethodRequest, AddToCartRequest, CheckoutRequest, Order, PaymentMethod,
    Restaurant,
};

/// Backend API paths
pub mod routes {
    pub const RESTAURANTS: &str = "/api/restaurants";
    pub const MY_ORDERS: &str = "/api/myorders";
    pub const CART_ADD: &str = "/api/cart/add";
    pub const PAYMENT_METHODS: &str = "/api/payment-methods";
    pub const CHECKOUT: &str = "/api/checkout";

    /// `/api/order/{id}/cancel`
    pub fn cancel_order(order_id: i64) -> String {
        format!("/api/order/{}/cancel", order_id)
    }
}

/// REST client for the ordering backend
#[derive(Debug, Clone)]
pub struct FoodApi<H> {
    http: H,
}

impl<H: HttpClient> FoodApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }

    /// Restaurants with their embedded menus
    pub async fn list_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        self.http.get(routes::RESTAURANTS).await
    }

    /// Orders of the current session in every status, the cart included
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get(routes::MY_ORDERS).await
    }

    pub async fn add_to_cart(
        &self,
        restaurant_id: i64,
        menu_item_id: i64,
        qty: u32,
    ) -> ClientResult<Ack> {
        let req = AddToCartRequest {
            restaurant_id,
            menu_item_id,
            qty,
        };
        self.http.post(routes::CART_ADD, &req).await
    }

    pub async fn cancel_order(&self, order_id: i64) -> ClientResult<Ack> {
        self.http.post_empty(&routes::cancel_order(order_id)).await
    }

    pub async fn list_payment_methods(&self) -> ClientResult<Vec<PaymentMethod>> {
        self.http.get(routes::PAYMENT_METHODS).await
    }

    /// Finalize the cart `order_id` with a saved payment method
    pub async fn checkout(&self, order_id: i64, payment_method_id: i64) -> ClientResult<Ack> {
        let req = CheckoutRequest {
            order_id,
            payment_method_id,
        };
        self.http.post(routes::CHECKOUT, &req).await
    }

    pub async fn add_payment_method(
        &self,
        method_name: &str,
        card_last4: &str,
    ) -> ClientResult<Ack> {
        let req = AddPaymentMethodRequest {
            method_name: method_name.to_string(),
            card_last4: card_last4.to_string(),
        };
        self.http.post(routes::PAYMENT_METHODS, &req).await
    }
}
