//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
///
/// The backend stores the status as free text. The three values the client
/// acts on get their own variant; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// The open shopping cart; at most one per session
    #[default]
    Cart,
    Placed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cart => "cart",
            Self::Placed => "placed",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cart" => Self::Cart,
            "placed" => Self::Placed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line as reported by `GET /api/myorders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub qty: u32,
    /// Unit price in currency unit
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl OrderLine {
    /// `Butter Chicken x2`
    pub fn summary(&self) -> String {
        format!("{} x{}", self.name, self.qty)
    }
}

/// Order entity (`GET /api/myorders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    /// Total amount in currency unit; the backend may send `null` for a fresh cart
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub cancelled_by: Option<String>,
    /// Country the order was placed in (drives the currency symbol)
    #[serde(default)]
    pub country: Option<String>,
    /// Restaurant display name
    #[serde(default)]
    pub restaurant: Option<String>,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    pub fn is_cart(&self) -> bool {
        self.status == OrderStatus::Cart
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    /// Total, treating a missing value as zero
    pub fn total(&self) -> Decimal {
        self.total.unwrap_or(Decimal::ZERO)
    }

    /// Item summary joined by `", "`, e.g. `Burger x1, Fries x2`
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(OrderLine::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Find the open cart in a list of orders
    pub fn find_cart(orders: &[Order]) -> Option<&Order> {
        orders.iter().find(|o| o.is_cart())
    }
}
