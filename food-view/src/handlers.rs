//! Element id to action wiring
//!
//! Built once when the app starts. Rendering only emits control ids; it
//! never registers anything here.

use std::collections::HashMap;

use crate::control::{Action, ControlId};
use crate::dom::ids;

#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    fixed: HashMap<String, Action>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the stock host page controls
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ids::CHECKOUT_BUTTON, Action::OpenCheckout);
        registry.register(ids::SUBMIT_PAYMENT, Action::SubmitPayment);
        registry.register(ids::CLOSE_PAYMENT, Action::ClosePayment);
        registry.register(ids::SHOW_ADD_PAYMENT, Action::ShowAddPayment);
        registry.register(ids::SAVE_PAYMENT_METHOD, Action::SavePaymentMethod);
        registry.register(ids::CLOSE_ADD_PAYMENT, Action::CloseAddPayment);
        registry
    }

    /// Bind a fixed element id; a later binding replaces an earlier one
    pub fn register(&mut self, element_id: impl Into<String>, action: Action) {
        self.fixed.insert(element_id.into(), action);
    }

    /// Action bound to `element_id`
    ///
    /// Fixed bindings win; otherwise panel controls resolve from their id.
    pub fn resolve(&self, element_id: &str) -> Option<Action> {
        self.fixed
            .get(element_id)
            .copied()
            .or_else(|| element_id.parse::<ControlId>().ok().map(Action::from))
    }

    pub fn len(&self) -> usize {
        self.fixed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
    }
}
