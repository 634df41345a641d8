pub mod address;
pub mod cart;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod review;

pub use address::*;
pub use cart::*;
pub use menu::*;
pub use order::*;
pub use restaurant::*;
pub use review::*;

/// Whole-rupee amount. Prices in this system carry no paise component.
pub type Rupees = i64;
