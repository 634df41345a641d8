//! System orchestration, startup, and shutdown logic.

pub mod storefront;
pub mod tracing;

pub use self::storefront::*;
pub use self::tracing::*;
