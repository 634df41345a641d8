//! # Mock Framework
//!
//! Utilities for testing clients and orchestration in isolation.
//!
//! Use [`mock_catalog_client`] or [`mock_cart_client`] to get a real client
//! wired to a receiver the test controls. The `expect_*` helpers assert which
//! request arrives next and hand back its responder, so a test can script the
//! actor's side of the conversation deterministically.

use tokio::sync::mpsc;

use crate::clients::{CartClient, CatalogClient};
use crate::domain::{Cart, Restaurant};
use crate::error::{CartError, CatalogError};
use crate::messages::{CartRequest, CatalogRequest, ServiceResponse};

pub fn mock_catalog_client(
    buffer_size: usize,
) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

pub fn mock_cart_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetCart request
pub async fn expect_get_cart(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<Cart, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::GetCart { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Clear request
pub async fn expect_clear(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<(), CartError>> {
    match receiver.recv().await {
        Some(CartRequest::Clear { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a restaurant-by-id lookup
pub async fn expect_get_restaurant_by_id(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(String, ServiceResponse<Option<Restaurant>, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::GetRestaurantById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_cart_client_round_trip() {
        let (client, mut receiver) = mock_cart_client(10);

        let get_task = tokio::spawn(async move { client.get_cart().await });

        let responder = expect_get_cart(&mut receiver).await.expect("Expected GetCart request");
        responder.send(Ok(Cart::default())).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Ok(Cart::default()));
    }
}
