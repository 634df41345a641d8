//! Typed clients for the storefront actors. Thin `Clone`-able wrappers
//! around the request channels; most methods are generated by
//! [`client_method!`](crate::client_method).

pub mod cart_client;
pub mod catalog_client;
mod macros;
pub mod order_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use order_client::*;
