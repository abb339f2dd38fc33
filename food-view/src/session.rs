//! Session chrome
//!
//! Page elements that depend only on who is signed in. Applied once at
//! start-up; the session never changes afterwards.

use shared::Session;

use crate::dom::{ids, Document};

/// Greeting shown in the header, if the host supplied a user name
pub fn greeting(session: &Session) -> Option<String> {
    let name = session.user_name();
    (!name.is_empty()).then(|| format!("👤 {}", name))
}

/// Set the greeting and hide controls the role cannot use
///
/// The payment panel is admin-only while the checkout button is hidden only
/// for members, so managers can check out without managing payment methods.
pub fn apply_session_chrome<D: Document + ?Sized>(session: &Session, document: &D) {
    if let Some(text) = greeting(session) {
        document.set_text(ids::USER_LABEL, &text);
    }
    if !session.can_manage_payment_methods() {
        document.set_visible(ids::PAYMENT_PANEL, false);
    }
    if !session.can_checkout() {
        document.set_visible(ids::CHECKOUT_BUTTON, false);
    }
    tracing::info!(
        user = session.user_name(),
        role = %session.role(),
        country = session.country(),
        "Session chrome applied"
    );
}
