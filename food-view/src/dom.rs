//! Host page seam
//!
//! The view layer never touches a real DOM directly. Everything it needs
//! from the page goes through [`Document`], addressed by the stable element
//! ids in [`ids`].

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Element ids the host page must provide
pub mod ids {
    // Panels
    pub const RESTAURANTS: &str = "restaurants";
    pub const ORDERS: &str = "myorders";

    // Session chrome
    pub const USER_LABEL: &str = "userLabel";
    pub const PAYMENT_PANEL: &str = "paymentPanel";
    pub const CHECKOUT_BUTTON: &str = "checkoutBtn";

    // Payment selection modal
    pub const PAYMENT_MODAL: &str = "payment-modal";
    pub const PAYMENT_SELECTOR: &str = "payment-selector";
    pub const SUBMIT_PAYMENT: &str = "submit-payment";
    pub const CLOSE_PAYMENT: &str = "close-payment";

    // Add payment method modal
    pub const ADD_PAYMENT_MODAL: &str = "add-payment-modal";
    pub const SHOW_ADD_PAYMENT: &str = "show-add-payment";
    pub const PAYMENT_NAME_INPUT: &str = "pm-name";
    pub const PAYMENT_LAST4_INPUT: &str = "pm-last4";
    pub const SAVE_PAYMENT_METHOD: &str = "save-payment-method";
    pub const CLOSE_ADD_PAYMENT: &str = "close-add-payment";

    /// Ids present on the stock page, with whether each starts visible
    pub const HOST_PAGE: &[(&str, bool)] = &[
        (RESTAURANTS, true),
        (ORDERS, true),
        (USER_LABEL, true),
        (PAYMENT_PANEL, true),
        (CHECKOUT_BUTTON, true),
        (PAYMENT_MODAL, false),
        (PAYMENT_SELECTOR, true),
        (SUBMIT_PAYMENT, true),
        (CLOSE_PAYMENT, true),
        (ADD_PAYMENT_MODAL, false),
        (SHOW_ADD_PAYMENT, true),
        (PAYMENT_NAME_INPUT, true),
        (PAYMENT_LAST4_INPUT, true),
        (SAVE_PAYMENT_METHOD, true),
        (CLOSE_ADD_PAYMENT, true),
    ];
}

/// Operations the view layer performs on the host page
///
/// Writes to an id the page does not provide are ignored.
pub trait Document: Send + Sync {
    /// Whether the page provides an element with this id
    fn contains(&self, id: &str) -> bool;

    /// Replace the element's markup
    fn set_html(&self, id: &str, html: &str);

    /// Replace the element's content with plain text
    fn set_text(&self, id: &str, text: &str) {
        self.set_html(id, &escape(text));
    }

    fn set_visible(&self, id: &str, visible: bool);

    /// Current value of a form control
    fn value(&self, id: &str) -> Option<String>;

    /// Set a form control's value, as the user would by typing or selecting
    fn set_value(&self, id: &str, value: &str);

    /// Blocking notice shown to the user
    fn notify(&self, message: &str);
}

/// Escape text for inclusion in markup
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Default)]
struct Element {
    html: String,
    visible: bool,
    value: Option<String>,
}

#[derive(Debug, Default)]
struct PageState {
    elements: BTreeMap<String, Element>,
    notices: Vec<String>,
}

/// In-memory [`Document`] used by the `foodflow` host and by tests
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<PageState>,
}

impl MemoryDocument {
    /// Empty page with no elements
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with every element of [`ids::HOST_PAGE`]
    pub fn host_page() -> Self {
        let doc = Self::new();
        for (id, visible) in ids::HOST_PAGE {
            doc.add_element(id, *visible);
        }
        doc
    }

    pub fn add_element(&self, id: &str, visible: bool) {
        self.state().elements.insert(
            id.to_string(),
            Element {
                visible,
                ..Default::default()
            },
        );
    }

    /// Markup of an element
    pub fn html(&self, id: &str) -> Option<String> {
        self.state().elements.get(id).map(|e| e.html.clone())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.state().elements.get(id).is_some_and(|e| e.visible)
    }

    /// Notices shown so far, oldest first
    pub fn notices(&self) -> Vec<String> {
        self.state().notices.clone()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.state().elements.contains_key(id)
    }

    fn set_html(&self, id: &str, html: &str) {
        match self.state().elements.get_mut(id) {
            Some(element) => element.html = html.to_string(),
            None => tracing::trace!(id, "set_html on missing element"),
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(element) = self.state().elements.get_mut(id) {
            element.visible = visible;
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        self.state().elements.get(id).and_then(|e| e.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) {
        if let Some(element) = self.state().elements.get_mut(id) {
            element.value = Some(value.to_string());
        }
    }

    fn notify(&self, message: &str) {
        tracing::info!(message, "notice");
        self.state().notices.push(message.to_string());
    }
}
