use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::client_method;
use crate::domain::{Address, Order, OrderStatus, PaymentMethod};
use crate::error::OrderError;
use crate::messages::OrderRequest;

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), String> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|e| e.to_string())
    }
}

client_method!(OrderClient => fn place_order(delivery_address: Address, payment: PaymentMethod, promo_code: Option<String>) -> String as OrderRequest::PlaceOrder, Error = OrderError);
client_method!(OrderClient => fn get_order(id: String) -> Option<Order> as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn advance_status(id: String) -> OrderStatus as OrderRequest::AdvanceStatus, Error = OrderError);
client_method!(OrderClient => fn cancel_order(id: String) -> () as OrderRequest::CancelOrder, Error = OrderError);

#[cfg(test)]
client_method!(OrderClient => fn order_count() -> usize as OrderRequest::OrderCount, Error = OrderError);
