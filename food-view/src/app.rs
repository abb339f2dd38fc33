//! Page bootstrap and event routing

use std::sync::Arc;

use food_client::{FoodApi, HttpClient};
use shared::Session;

use crate::control::Action;
use crate::dispatch::{ActionOutcome, Dispatcher};
use crate::dom::{ids, Document};
use crate::handlers::HandlerRegistry;
use crate::render::{Panel, Renderer};
use crate::session::apply_session_chrome;

/// The view layer wired to one host page
pub struct App<H, D> {
    session: Arc<Session>,
    document: Arc<D>,
    renderer: Renderer<H, D>,
    dispatcher: Dispatcher<H, D>,
    handlers: HandlerRegistry,
}

impl<H: HttpClient, D: Document> App<H, D> {
    pub fn new(api: FoodApi<H>, document: Arc<D>, session: Session) -> Self {
        Self::with_handlers(api, document, session, HandlerRegistry::standard())
    }

    pub fn with_handlers(
        api: FoodApi<H>,
        document: Arc<D>,
        session: Session,
        handlers: HandlerRegistry,
    ) -> Self {
        let api = Arc::new(api);
        let session = Arc::new(session);
        let renderer = Renderer::new(Arc::clone(&api), Arc::clone(&document), Arc::clone(&session));
        let dispatcher = Dispatcher::new(
            api,
            Arc::clone(&document),
            Arc::clone(&session),
            renderer.clone(),
        );
        Self {
            session,
            document,
            renderer,
            dispatcher,
            handlers,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn api(&self) -> &FoodApi<H> {
        self.renderer.api()
    }

    pub fn dispatcher(&self) -> &Dispatcher<H, D> {
        &self.dispatcher
    }

    /// Page load: session chrome, then both panels fetched concurrently
    pub async fn start(&self) {
        apply_session_chrome(&self.session, self.document.as_ref());
        self.renderer.refresh_all().await;
        tracing::info!("Page loaded");
    }

    pub async fn refresh(&self, panel: Panel) {
        self.renderer.refresh(panel).await;
    }

    /// Handle a click on `element_id`
    ///
    /// Returns `None` when nothing is bound to the element.
    pub async fn click(&mut self, element_id: &str) -> Option<ActionOutcome> {
        let Some(action) = self.handlers.resolve(element_id) else {
            tracing::debug!(element_id, "Click on unbound element");
            return None;
        };
        tracing::debug!(element_id, ?action, "Dispatching");
        Some(self.dispatch(action).await)
    }

    /// Run an action, reading any form values it needs from the page
    pub async fn dispatch(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::AddToCart {
                restaurant_id,
                item_id,
            } => self.dispatcher.add_to_cart(restaurant_id, item_id).await,
            Action::CancelOrder { order_id } => self.dispatcher.cancel_order(order_id).await,
            Action::OpenCheckout => self.dispatcher.open_checkout().await,
            Action::SubmitPayment => {
                let selected = self
                    .document
                    .value(ids::PAYMENT_SELECTOR)
                    .and_then(|v| v.trim().parse::<i64>().ok());
                self.dispatcher.submit_payment(selected).await
            }
            Action::ClosePayment => {
                self.dispatcher.close_payment();
                ActionOutcome::Completed
            }
            Action::ShowAddPayment => self.dispatcher.show_add_payment(),
            Action::SavePaymentMethod => {
                let name = self.document.value(ids::PAYMENT_NAME_INPUT).unwrap_or_default();
                let last4 = self.document.value(ids::PAYMENT_LAST4_INPUT).unwrap_or_default();
                self.dispatcher.save_payment_method(&name, &last4).await
            }
            Action::CloseAddPayment => {
                self.dispatcher.close_add_payment();
                ActionOutcome::Completed
            }
        }
    }
}
