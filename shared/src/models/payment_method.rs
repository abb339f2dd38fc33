//! Payment Method Model

use serde::{Deserialize, Serialize};

/// Saved payment method (`GET /api/payment-methods`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub method_name: String,
    pub card_last4: String,
}

impl PaymentMethod {
    /// Label shown in the payment selector, e.g. `Admin Card - 1111`
    pub fn label(&self) -> String {
        format!("{} - {}", self.method_name, self.card_last4)
    }
}
