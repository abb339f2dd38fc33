//! Data models
//!
//! Everything here is read from the ordering backend except [`Session`],
//! which the hosting page provides once at load time.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY on the backend).

pub mod order;
pub mod payment_method;
pub mod restaurant;
pub mod session;

// Re-exports
pub use order::*;
pub use payment_method::*;
pub use restaurant::*;
pub use session::*;
