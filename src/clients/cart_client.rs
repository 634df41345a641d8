use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::client_method;
use crate::domain::{Cart, CustomizationOption, MenuItem};
use crate::error::CartError;
use crate::messages::CartRequest;

/// Client for interacting with the cart actor. Mutating methods return the
/// updated cart snapshot so callers can re-render without a second round
/// trip.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), String> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|e| e.to_string())
    }
}

client_method!(CartClient => fn add_item(item: MenuItem, quantity: u32, selected_options: Vec<CustomizationOption>) -> Cart as CartRequest::AddItem, Error = CartError);
client_method!(CartClient => fn remove_item(item_id: String) -> Cart as CartRequest::RemoveItem, Error = CartError);
client_method!(CartClient => fn set_quantity(item_id: String, quantity: u32) -> Cart as CartRequest::SetQuantity, Error = CartError);
client_method!(CartClient => fn clear() -> () as CartRequest::Clear, Error = CartError);
client_method!(CartClient => fn get_cart() -> Cart as CartRequest::GetCart, Error = CartError);
client_method!(CartClient => fn item_count() -> u32 as CartRequest::ItemCount, Error = CartError);
