//! Restaurant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu entry of a restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in the restaurant's currency unit
    pub price: Decimal,
}

/// Restaurant with its embedded menu (`GET /api/restaurants`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}
