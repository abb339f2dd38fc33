//! Shared types for FoodFlow
//!
//! Wire types exchanged with the ordering backend, the read-only session
//! context, and the country to currency mapping used by every view.

pub mod client;
pub mod currency;
pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{Ack, AddPaymentMethodRequest, AddToCartRequest, CheckoutRequest};
pub use currency::{currency_symbol, format_amount, DEFAULT_CURRENCY};
pub use error::SessionError;
pub use models::{
    MenuItem, Order, OrderLine, OrderStatus, PaymentMethod, Restaurant, Role, Session,
};
