//! Request payloads and acknowledgements for the ordering API
//!
//! Field names follow the backend's snake_case JSON.

use serde::{Deserialize, Serialize};

/// `POST /api/cart/add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub restaurant_id: i64,
    pub menu_item_id: i64,
    pub qty: u32,
}

/// `POST /api/checkout`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub order_id: i64,
    pub payment_method_id: i64,
}

/// `POST /api/payment-methods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPaymentMethodRequest {
    pub method_name: String,
    pub card_last4: String,
}

/// Acknowledgement returned by every mutating endpoint
///
/// The backend answers `{"message": "...", ...}` with an optional id of the
/// touched record (`order_id` for cart/checkout, `id` for payment methods).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
}
