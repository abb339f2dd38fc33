//! Action dispatcher
//!
//! Turns user actions into backend mutations. Every mutation is
//! fire-and-forget: a failed request is logged and the orders panel is
//! refreshed anyway, so the next fetch shows what the backend really holds.
//!
//! The only client-held state is the id of the cart being checked out. It
//! is written when checkout starts and read when the payment is submitted.

use std::sync::Arc;

use food_client::{FoodApi, HttpClient};
use shared::{Order, Session};

use crate::dom::{ids, Document};
use crate::render::{payment_options, Panel, Renderer};

pub const MEMBERS_CANNOT_CANCEL: &str = "Members cannot cancel orders.";
pub const MEMBERS_CANNOT_CHECKOUT: &str = "Members cannot checkout.";
pub const CART_EMPTY: &str = "Your cart is empty.";

/// Quantity added per click
const ADD_QTY: u32 = 1;

/// What an action ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran to the end, including any refresh
    Completed,
    /// The role may not perform the action; a notice was shown and no
    /// request was made
    Blocked,
    /// Checkout found no order in the cart
    CartEmpty,
    /// Payment selection is open and waiting for a choice
    AwaitingPayment,
    /// A fetch the action depended on failed; nothing changed
    Aborted,
    /// The action only applies to admins and was ignored
    Ignored,
}

pub struct Dispatcher<H, D> {
    api: Arc<FoodApi<H>>,
    document: Arc<D>,
    session: Arc<Session>,
    renderer: Renderer<H, D>,
    current_order_id: Option<i64>,
}

impl<H: HttpClient, D: Document> Dispatcher<H, D> {
    pub fn new(
        api: Arc<FoodApi<H>>,
        document: Arc<D>,
        session: Arc<Session>,
        renderer: Renderer<H, D>,
    ) -> Self {
        Self {
            api,
            document,
            session,
            renderer,
            current_order_id: None,
        }
    }

    /// Cart selected by the last checkout, if any
    pub fn current_order_id(&self) -> Option<i64> {
        self.current_order_id
    }

    /// Completion callback shared by every mutation
    async fn orders_changed(&self) {
        self.renderer.refresh(Panel::Orders).await;
    }

    pub async fn add_to_cart(&self, restaurant_id: i64, item_id: i64) -> ActionOutcome {
        if let Err(e) = self.api.add_to_cart(restaurant_id, item_id, ADD_QTY).await {
            tracing::error!(restaurant_id, item_id, error = %e, "Add to cart failed");
        }
        self.orders_changed().await;
        ActionOutcome::Completed
    }

    pub async fn cancel_order(&self, order_id: i64) -> ActionOutcome {
        if self.session.is_member() {
            tracing::warn!(order_id, "Cancel blocked for member");
            self.document.notify(MEMBERS_CANNOT_CANCEL);
            return ActionOutcome::Blocked;
        }

        if let Err(e) = self.api.cancel_order(order_id).await {
            tracing::error!(order_id, error = %e, "Cancel order failed");
        }
        self.orders_changed().await;
        ActionOutcome::Completed
    }

    /// Start checkout for the order currently in the cart
    pub async fn open_checkout(&mut self) -> ActionOutcome {
        if !self.session.can_checkout() {
            tracing::warn!("Checkout blocked for member");
            self.document.notify(MEMBERS_CANNOT_CHECKOUT);
            return ActionOutcome::Blocked;
        }

        let orders = match self.api.list_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::error!(error = %e, "Checkout could not load orders");
                return ActionOutcome::Aborted;
            }
        };

        let Some(cart) = Order::find_cart(&orders) else {
            self.document.notify(CART_EMPTY);
            return ActionOutcome::CartEmpty;
        };

        tracing::info!(order_id = cart.id, "Checkout started");
        self.current_order_id = Some(cart.id);
        self.open_payment_selection().await
    }

    /// Fill the payment selector and reveal the payment modal
    ///
    /// The selector starts on the first listed method, or on nothing when
    /// there are none.
    pub async fn open_payment_selection(&self) -> ActionOutcome {
        match self.api.list_payment_methods().await {
            Ok(methods) => {
                self.document
                    .set_html(ids::PAYMENT_SELECTOR, &payment_options(&methods));
                let first = methods.first().map(|m| m.id.to_string()).unwrap_or_default();
                self.document.set_value(ids::PAYMENT_SELECTOR, &first);
                self.document.set_visible(ids::PAYMENT_MODAL, true);
                ActionOutcome::AwaitingPayment
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load payment methods");
                ActionOutcome::Aborted
            }
        }
    }

    /// Finalize the selected cart with `payment_method_id`
    ///
    /// Without a selected cart or payment method nothing is sent; the modal
    /// is closed and the orders refreshed either way.
    pub async fn submit_payment(&self, payment_method_id: Option<i64>) -> ActionOutcome {
        match (self.current_order_id, payment_method_id) {
            (Some(order_id), Some(pm_id)) => {
                if let Err(e) = self.api.checkout(order_id, pm_id).await {
                    tracing::error!(
                        order_id,
                        payment_method_id = pm_id,
                        error = %e,
                        "Checkout failed"
                    );
                }
            }
            (order_id, pm_id) => {
                tracing::warn!(
                    ?order_id,
                    payment_method_id = ?pm_id,
                    "Payment submitted without a selection"
                );
            }
        }

        self.close_payment();
        self.orders_changed().await;
        ActionOutcome::Completed
    }

    pub fn close_payment(&self) {
        self.document.set_visible(ids::PAYMENT_MODAL, false);
    }

    /// Reveal the add-payment form; admins only
    pub fn show_add_payment(&self) -> ActionOutcome {
        if !self.session.can_manage_payment_methods() {
            return ActionOutcome::Ignored;
        }
        self.document.set_visible(ids::ADD_PAYMENT_MODAL, true);
        ActionOutcome::Completed
    }

    pub fn close_add_payment(&self) {
        self.document.set_visible(ids::ADD_PAYMENT_MODAL, false);
    }

    /// Save a payment method
    ///
    /// The form is only shown to admins; the role is not re-checked here and
    /// the backend has the final word.
    pub async fn save_payment_method(&self, method_name: &str, card_last4: &str) -> ActionOutcome {
        if let Err(e) = self.api.add_payment_method(method_name, card_last4).await {
            tracing::error!(error = %e, "Saving payment method failed");
        }
        self.close_add_payment();
        ActionOutcome::Completed
    }
}
