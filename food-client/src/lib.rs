//! Food Client - REST client for the FoodFlow ordering backend
//!
//! One method per backend endpoint, each a single round trip. Callers decide
//! what to do with failures; this crate only reports them.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{routes, FoodApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::{Ack, MenuItem, Order, OrderStatus, PaymentMethod, Restaurant};
