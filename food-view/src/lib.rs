//! FoodFlow view layer
//!
//! Renders restaurants, orders and payment methods fetched from the ordering
//! backend into host-page fragments and forwards user actions back to it.
//!
//! Flow: [`Session`](shared::Session) is established once, [`App::start`]
//! applies the session chrome and loads both panels concurrently, and
//! [`App::click`] routes control ids through the [`HandlerRegistry`] to the
//! [`Dispatcher`], which mutates the backend and refreshes the orders panel.

pub mod app;
pub mod config;
pub mod control;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod render;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use config::ViewConfig;
pub use control::{Action, ControlId};
pub use dispatch::{ActionOutcome, Dispatcher};
pub use dom::{Document, MemoryDocument};
pub use error::{ViewError, ViewResult};
pub use handlers::HandlerRegistry;
pub use render::{Panel, Renderer};
