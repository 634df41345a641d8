use std::fmt;

use chrono::{DateTime, Local};

use super::{Address, CartItem, Rupees};

/// A placed order with its frozen money breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub items: Vec<CartItem>,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub delivery_address: Address,
    pub payment: PaymentMethod,
    pub created_at: DateTime<Local>,
    pub estimated_delivery_at: Option<DateTime<Local>>,
}

/// The bill breakdown computed once at placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Rupees,
    pub delivery_fee: Rupees,
    pub taxes: Rupees,
    pub discount: Rupees,
    /// `subtotal + delivery_fee + taxes - discount`, never below zero.
    pub total: Rupees,
}

/// Progress of an order through the kitchen and delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The next step in the fixed progression, or `None` from a terminal
    /// state. Cancellation is not a step; it is its own operation.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Label shown on the tracking timeline.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Order Placed",
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the customer pays at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Upi,
    Card,
    Cash,
    Wallet,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash on Delivery",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
