//! Panel rendering
//!
//! Each refresh fetches fresh data and replaces the whole panel. There is no
//! client-side cache and no diffing, so rendering the same backend state
//! twice yields identical markup.

use std::sync::Arc;

use food_client::{FoodApi, HttpClient};
use shared::{currency, Order, PaymentMethod, Restaurant, Session};

use crate::control::ControlId;
use crate::dom::{escape, ids, Document};

pub const LOADING_RESTAURANTS: &str = "Loading restaurants...";
pub const LOADING_ORDERS: &str = "Loading orders...";
pub const NO_ORDERS: &str = "No orders yet.";
pub const RESTAURANTS_ERROR: &str = "Error loading restaurants.";
pub const ORDERS_ERROR: &str = "Error loading orders.";

/// Thumbnails cycled over restaurants in backend order
const THUMBNAILS: &[&str] = &[
    "/static/img/rest1.jpg",
    "/static/img/rest2.jpg",
    "/static/img/rest3.jpg",
    "/static/img/rest4.jpg",
    "/static/img/rest5.jpg",
    "/static/img/rest6.jpg",
];

/// Independently refreshable page region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Restaurants,
    Orders,
}

impl Panel {
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::Restaurants => ids::RESTAURANTS,
            Self::Orders => ids::ORDERS,
        }
    }
}

/// Fetches panel data and writes the markup into the document
pub struct Renderer<H, D> {
    api: Arc<FoodApi<H>>,
    document: Arc<D>,
    session: Arc<Session>,
}

impl<H, D> Clone for Renderer<H, D> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            document: Arc::clone(&self.document),
            session: Arc::clone(&self.session),
        }
    }
}

impl<H: HttpClient, D: Document> Renderer<H, D> {
    pub fn new(api: Arc<FoodApi<H>>, document: Arc<D>, session: Arc<Session>) -> Self {
        Self {
            api,
            document,
            session,
        }
    }

    pub fn api(&self) -> &FoodApi<H> {
        &self.api
    }

    /// Re-fetch and fully replace one panel
    pub async fn refresh(&self, panel: Panel) {
        match panel {
            Panel::Restaurants => self.load_restaurants().await,
            Panel::Orders => self.load_orders().await,
        }
    }

    /// Initial page load: both panels fetched concurrently
    pub async fn refresh_all(&self) {
        tokio::join!(self.load_restaurants(), self.load_orders());
    }

    async fn load_restaurants(&self) {
        let id = Panel::Restaurants.element_id();
        if !self.document.contains(id) {
            return;
        }
        self.document.set_text(id, LOADING_RESTAURANTS);

        match self.api.list_restaurants().await {
            Ok(restaurants) => {
                let html = restaurant_panel(&self.session, &restaurants);
                self.document.set_html(id, &html);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load restaurants");
                self.document.set_text(id, RESTAURANTS_ERROR);
            }
        }
    }

    async fn load_orders(&self) {
        let id = Panel::Orders.element_id();
        if !self.document.contains(id) {
            return;
        }
        self.document.set_text(id, LOADING_ORDERS);

        match self.api.list_orders().await {
            Ok(orders) => {
                tracing::debug!(count = orders.len(), "Orders loaded");
                let html = orders_panel(&self.session, &orders);
                self.document.set_html(id, &html);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load orders");
                self.document.set_text(id, ORDERS_ERROR);
            }
        }
    }
}

/// Restaurant cards visible to `session`
///
/// Non-admin sessions only get restaurants of their own country. The
/// thumbnail index follows the position in the unfiltered list.
pub fn restaurant_panel(session: &Session, restaurants: &[Restaurant]) -> String {
    let mut html = String::new();
    for (index, restaurant) in restaurants.iter().enumerate() {
        if !session.can_see_restaurant(restaurant) {
            continue;
        }
        html.push_str(&restaurant_card(restaurant, THUMBNAILS[index % THUMBNAILS.len()]));
    }
    html
}

fn restaurant_card(restaurant: &Restaurant, thumbnail: &str) -> String {
    let mut card = String::from("<div class=\"restaurant-card\">");
    card.push_str(&format!("<img src=\"{}\" class=\"thumb\">", thumbnail));
    card.push_str(&format!("<h3>{}</h3>", escape(&restaurant.name)));
    card.push_str(&format!(
        "<div class=\"badge\">{}</div>",
        escape(&restaurant.country)
    ));
    card.push_str("<h4>Menu</h4>");
    for item in &restaurant.menu {
        let control = ControlId::AddToCart {
            restaurant_id: restaurant.id,
            item_id: item.id,
        };
        card.push_str(&format!(
            "<div class=\"menu-item\"><span>{} - {}</span>\
             <button id=\"{}\" class=\"btn-small btn-primary\">Add</button></div>",
            escape(&item.name),
            escape(&currency::format_amount(&restaurant.country, item.price)),
            control,
        ));
    }
    card.push_str("</div>");
    card
}

/// Order rows, or the empty placeholder
pub fn orders_panel(session: &Session, orders: &[Order]) -> String {
    if orders.is_empty() {
        return escape(NO_ORDERS);
    }
    orders.iter().map(|o| order_row(session, o)).collect()
}

fn order_row(session: &Session, order: &Order) -> String {
    let amount = currency::format_amount(session.order_country(order), order.total());

    let mut row = String::from("<div class=\"order-item\"><div>");
    row.push_str(&format!("<div class=\"meta\">Order #{}</div>", order.id));
    row.push_str(&format!(
        "<div class=\"meta\">{}</div>",
        escape(&order.item_summary())
    ));
    row.push_str(&format!(
        "<div class=\"meta\">Added by: {}</div>",
        escape(
            order
                .added_by
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("Unknown")
        )
    ));
    if let Some(by) = order.cancelled_by.as_deref().filter(|s| !s.is_empty()) {
        row.push_str(&format!("<div class=\"meta\">Cancelled by: {}</div>", escape(by)));
    }
    row.push_str(&format!("<div class=\"meta\">{}</div>", escape(&amount)));
    row.push_str("</div><div>");

    if session.can_cancel(order) {
        row.push_str(&format!(
            "<button id=\"{}\" class=\"btn-small btn-ghost\">Cancel</button>",
            ControlId::Cancel { order_id: order.id }
        ));
    } else {
        row.push_str(&format!(
            "<span class=\"meta\">({})</span>",
            escape(order.status.as_str())
        ));
    }
    row.push_str("</div></div>");
    row
}

/// `<option>` list for the payment selector
pub fn payment_options(methods: &[PaymentMethod]) -> String {
    methods
        .iter()
        .map(|m| format!("<option value=\"{}\">{}</option>", m.id, escape(&m.label())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::testing::{orders_json, restaurants_json, FakeBackend};
    use serde_json::json;
    use shared::Role;

    fn renderer<H: HttpClient>(
        backend: H,
        session: Session,
    ) -> (Renderer<H, MemoryDocument>, Arc<MemoryDocument>) {
        let doc = Arc::new(MemoryDocument::host_page());
        let renderer = Renderer::new(
            Arc::new(FoodApi::new(backend)),
            Arc::clone(&doc),
            Arc::new(session),
        );
        (renderer, doc)
    }

    fn restaurants() -> Vec<Restaurant> {
        serde_json::from_value(restaurants_json()).unwrap()
    }

    fn orders() -> Vec<Order> {
        serde_json::from_value(orders_json()).unwrap()
    }

    #[test]
    fn test_manager_sees_only_own_country() {
        let session = Session::new("captain_america", Role::Manager, "America");
        let html = restaurant_panel(&session, &restaurants());
        assert_eq!(html.matches("class=\"restaurant-card\"").count(), 1);
        assert!(html.contains("<h3>Burger Point</h3>"));
        assert!(html.contains("Burger - $6.49"));
        assert!(html.contains("Fries - $2.99"));
        assert!(!html.contains("Spice India"));
        assert!(!html.contains('₹'));
    }

    #[test]
    fn test_member_filter_ignores_foreign_restaurants() {
        let session = Session::new("thor", Role::Member, "India");
        let mut many = Vec::new();
        for i in 0..20 {
            let mut r = restaurants()[0].clone();
            r.id = i;
            many.push(r);
        }
        assert_eq!(restaurant_panel(&session, &many), "");
    }

    #[test]
    fn test_admin_sees_everything() {
        let session = Session::new("nick", Role::Admin, "India");
        let html = restaurant_panel(&session, &restaurants());
        assert_eq!(html.matches("class=\"restaurant-card\"").count(), 2);
        assert!(html.contains("Butter Chicken - ₹100"));
        assert!(html.contains("id=\"add-1-2\""));
        assert!(html.contains("id=\"add-3-7\""));
    }

    #[test]
    fn test_thumbnail_follows_backend_position() {
        let session = Session::new("cm", Role::Manager, "India");
        let html = restaurant_panel(&session, &restaurants());
        // Spice India is second in the backend list
        assert!(html.contains("/static/img/rest2.jpg"));
        assert!(!html.contains("/static/img/rest1.jpg"));
    }

    #[test]
    fn test_empty_menu_renders_no_items() {
        let session = Session::new("nick", Role::Admin, "India");
        let restaurant = Restaurant {
            id: 9,
            name: "Empty Kitchen".into(),
            country: "India".into(),
            menu: vec![],
        };
        let html = restaurant_panel(&session, &[restaurant]);
        assert!(html.contains("<h4>Menu</h4></div>"));
        assert!(!html.contains("menu-item"));
    }

    #[test]
    fn test_orders_panel_for_manager() {
        let session = Session::new("captain_america", Role::Manager, "America");
        let html = orders_panel(&session, &orders());
        assert_eq!(html.matches("class=\"order-item\"").count(), 2);
        assert!(html.contains("Order #10"));
        assert!(html.contains("Burger x1, Fries x1"));
        assert!(html.contains("Added by: captain_america"));
        assert!(html.contains("$9.48"));
        assert!(html.contains("id=\"cancel-10\""));
        // cancelled order: status text, canceller, unknown creator, session currency
        assert!(!html.contains("id=\"cancel-11\""));
        assert!(html.contains("<span class=\"meta\">(cancelled)</span>"));
        assert!(html.contains("Cancelled by: nick"));
        assert!(html.contains("Added by: Unknown"));
        assert!(html.contains("$100"));
    }

    #[test]
    fn test_member_never_gets_cancel_controls() {
        let session = Session::new("thor", Role::Member, "India");
        let html = orders_panel(&session, &orders());
        assert!(!html.contains("Cancel</button>"));
        assert!(html.contains("<span class=\"meta\">(cart)</span>"));
        // order 11 has no country, so the session's applies
        assert!(html.contains("₹100"));
    }

    #[test]
    fn test_blank_creator_shows_unknown() {
        let session = Session::new("cm", Role::Manager, "India");
        let orders: Vec<Order> = serde_json::from_value(json!([
            {"id": 5, "status": "placed", "items": [], "total": 1.0, "added_by": ""}
        ]))
        .unwrap();
        let html = orders_panel(&session, &orders);
        assert!(html.contains("Added by: Unknown"));
        assert!(!html.contains("Added by: </div>"));
    }

    #[test]
    fn test_unrecognised_status_is_cancellable_by_non_members() {
        let orders: Vec<Order> = serde_json::from_value(json!([
            {"id": 12, "status": "refunded", "items": [], "total": 3.5, "country": "America"}
        ]))
        .unwrap();

        let manager = Session::new("ca", Role::Manager, "America");
        let html = orders_panel(&manager, &orders);
        assert!(html.contains("id=\"cancel-12\""));

        let member = Session::new("thor", Role::Member, "America");
        let html = orders_panel(&member, &orders);
        assert!(!html.contains("cancel-12"));
        assert!(html.contains("<span class=\"meta\">(refunded)</span>"));
    }

    #[test]
    fn test_empty_orders_placeholder() {
        let session = Session::new("cm", Role::Manager, "India");
        let html = orders_panel(&session, &[]);
        assert_eq!(html, NO_ORDERS);
        assert!(!html.contains("order-item"));
    }

    #[test]
    fn test_payment_options() {
        let methods: Vec<PaymentMethod> =
            serde_json::from_value(crate::testing::payment_methods_json()).unwrap();
        assert_eq!(
            payment_options(&methods),
            "<option value=\"1\">Admin Card - 1111</option><option value=\"2\">Visa - 4242</option>"
        );
    }

    #[tokio::test]
    async fn test_refresh_orders_is_idempotent() {
        let backend = FakeBackend::new().reply("GET", "/api/myorders", orders_json());
        let (renderer, doc) = renderer(backend, Session::new("cm", Role::Manager, "India"));

        renderer.refresh(Panel::Orders).await;
        let first = doc.html(ids::ORDERS).unwrap();
        renderer.refresh(Panel::Orders).await;
        let second = doc.html(ids::ORDERS).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(renderer.api().http().paths(), vec!["GET /api/myorders"; 2]);
    }

    #[tokio::test]
    async fn test_refresh_all_loads_both_panels() {
        let backend = FakeBackend::new()
            .reply("GET", "/api/restaurants", restaurants_json())
            .reply("GET", "/api/myorders", json!([]));
        let (renderer, doc) = renderer(backend, Session::new("ca", Role::Manager, "America"));

        renderer.refresh_all().await;

        assert!(doc.html(ids::RESTAURANTS).unwrap().contains("Burger Point"));
        assert_eq!(doc.html(ids::ORDERS).as_deref(), Some(NO_ORDERS));
        let mut paths = renderer.api().http().paths();
        paths.sort();
        assert_eq!(paths, vec!["GET /api/myorders", "GET /api/restaurants"]);
    }

    /// Holds every GET until two are in flight at once
    struct Gated {
        inner: FakeBackend,
        gate: tokio::sync::Barrier,
    }

    #[async_trait::async_trait]
    impl HttpClient for Gated {
        async fn get<T: serde::de::DeserializeOwned>(
            &self,
            path: &str,
        ) -> food_client::ClientResult<T> {
            self.gate.wait().await;
            self.inner.get(path).await
        }

        async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
            &self,
            path: &str,
            body: &B,
        ) -> food_client::ClientResult<T> {
            self.inner.post(path, body).await
        }

        async fn post_empty<T: serde::de::DeserializeOwned>(
            &self,
            path: &str,
        ) -> food_client::ClientResult<T> {
            self.inner.post_empty(path).await
        }
    }

    #[tokio::test]
    async fn test_refresh_all_fetches_concurrently() {
        let backend = Gated {
            inner: FakeBackend::new()
                .reply("GET", "/api/restaurants", restaurants_json())
                .reply("GET", "/api/myorders", orders_json()),
            gate: tokio::sync::Barrier::new(2),
        };
        let (renderer, doc) = renderer(backend, Session::new("ca", Role::Manager, "America"));

        // one fetch at a time would never get past the gate
        tokio::time::timeout(std::time::Duration::from_secs(5), renderer.refresh_all())
            .await
            .expect("panels were fetched one after the other");

        assert!(doc.html(ids::RESTAURANTS).unwrap().contains("Burger Point"));
        assert!(doc.html(ids::ORDERS).unwrap().contains("Order #10"));
    }

    #[tokio::test]
    async fn test_fetch_failures_show_placeholders() {
        let backend = FakeBackend::new()
            .fail("GET", "/api/restaurants")
            .reply("GET", "/api/myorders", json!({"not": "a list"}));
        let (renderer, doc) = renderer(backend, Session::new("cm", Role::Manager, "India"));

        renderer.refresh_all().await;

        assert_eq!(doc.html(ids::RESTAURANTS).as_deref(), Some(RESTAURANTS_ERROR));
        assert_eq!(doc.html(ids::ORDERS).as_deref(), Some(ORDERS_ERROR));
    }

    #[tokio::test]
    async fn test_missing_panel_skips_fetch() {
        let doc = Arc::new(MemoryDocument::new());
        let renderer = Renderer::new(
            Arc::new(FoodApi::new(FakeBackend::new())),
            doc,
            Arc::new(Session::new("cm", Role::Manager, "India")),
        );
        renderer.refresh_all().await;
        assert!(renderer.api().http().calls().is_empty());
    }
}
