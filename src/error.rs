use thiserror::Error;

use crate::domain::{OrderStatus, Rupees};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart holds items from restaurant {in_cart}, cannot add from {attempted}")]
    DifferentRestaurant { in_cart: String, attempted: String },
    #[error("Item is not available right now: {0}")]
    ItemUnavailable(String),
    #[error("Invalid customization selection: {0}")]
    InvalidSelection(#[from] SelectionError),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Why a customization selection was rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("option {0} does not belong to this item")]
    UnknownOption(String),
    #[error("a choice from \"{0}\" is required")]
    RequiredGroupMissing(String),
    #[error("\"{group}\" allows at most {max} selections, got {picked}")]
    TooManySelections { group: String, max: u32, picked: u32 },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),
    #[error("Restaurant is currently closed: {0}")]
    RestaurantClosed(String),
    #[error("Subtotal {subtotal} is below the restaurant minimum of {minimum}")]
    BelowMinimumOrder { minimum: Rupees, subtotal: Rupees },
    #[error("Promo code not applicable: {0}")]
    InvalidPromoCode(String),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("No status change possible from {from:?}")]
    InvalidTransition { from: OrderStatus },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
