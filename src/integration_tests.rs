#[cfg(test)]
mod tests {
    use crate::app_system::StorefrontSystem;
    use crate::catalog_service::CatalogData;
    use crate::domain::{Address, Cart, CartItem, MenuItem, OrderStatus, OrderTotals, PaymentMethod};
    use crate::error::OrderError;
    use crate::fixtures;
    use crate::mock_framework::{
        expect_clear, expect_get_cart, expect_get_restaurant_by_id, mock_cart_client,
        mock_catalog_client,
    };
    use crate::order_service::OrderService;

    fn fixture_item(name: &str) -> MenuItem {
        fixtures::sample_catalog()
            .menu_items
            .into_iter()
            .find(|item| item.name == name)
            .expect("fixture dish")
    }

    fn home_address() -> Address {
        fixtures::sample_addresses()
            .into_iter()
            .find(|a| a.label == "Home")
            .expect("fixture address")
    }

    #[tokio::test]
    async fn test_checkout_to_tracking_flow() {
        // 1. Start the full system over the bundled catalog
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        // 2. Build the cart: 2x Butter Chicken Combo + 1x Masala Dosa Special
        system
            .cart_client
            .add_item(fixture_item("Butter Chicken Combo"), 2, vec![])
            .await
            .unwrap();
        system
            .cart_client
            .add_item(fixture_item("Masala Dosa Special"), 1, vec![])
            .await
            .unwrap();

        // 3. Place with the SPICE20 promo
        let order_id = system
            .order_client
            .place_order(home_address(), PaymentMethod::Upi, Some("SPICE20".to_string()))
            .await
            .unwrap();
        assert!(order_id.starts_with("ORD-"));

        // 4. The tracking page reads the same order checkout wrote
        let order = system.order_client.get_order(order_id.clone()).await.unwrap().unwrap();
        assert_eq!(order.restaurant_name, "Spice Garden");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment, PaymentMethod::Upi);
        assert_eq!(
            order.totals,
            OrderTotals {
                subtotal: 747,
                delivery_fee: 30,
                taxes: 37,
                discount: 149,
                total: 665,
            }
        );
        assert!(order.estimated_delivery_at.is_some());

        // 5. Placement emptied the cart
        assert_eq!(system.cart_client.item_count().await, Ok(0));
        assert_eq!(system.order_client.order_count().await, Ok(1));

        // 6. Kitchen confirms
        let status = system.order_client.advance_status(order_id.clone()).await.unwrap();
        assert_eq!(status, OrderStatus::Confirmed);
        let order = system.order_client.get_order(order_id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_place_order_flow_through_collaborators() {
        // 1. Setup mocks for both collaborators
        let (catalog_client, mut catalog_rx) = mock_catalog_client(10);
        let (cart_client, mut cart_rx) = mock_cart_client(10);
        let (service, order_client) = OrderService::new(10, catalog_client, cart_client);
        tokio::spawn(service.run());

        // 2. Execute placement in background
        let place_task = tokio::spawn(async move {
            order_client
                .place_order(home_address(), PaymentMethod::Card, None)
                .await
        });

        // 3. Verify interactions, scripting each collaborator's reply

        // Expect the cart snapshot
        let responder = expect_get_cart(&mut cart_rx).await.expect("Expected GetCart");
        let cart = Cart {
            restaurant_id: Some("r1".to_string()),
            items: vec![CartItem::new(fixture_item("Butter Chicken Combo"), 1, vec![])],
        };
        responder.send(Ok(cart)).unwrap();

        // Expect the restaurant lookup
        let (id, responder) = expect_get_restaurant_by_id(&mut catalog_rx)
            .await
            .expect("Expected GetRestaurantById");
        assert_eq!(id, "r1");
        let spice_garden = fixtures::sample_catalog()
            .restaurants
            .into_iter()
            .find(|r| r.id == "r1")
            .expect("fixture restaurant");
        responder.send(Ok(Some(spice_garden))).unwrap();

        // Expect the cart clear after the order is stored
        let responder = expect_clear(&mut cart_rx).await.expect("Expected Clear");
        responder.send(Ok(())).unwrap();

        // 4. Verify result
        let result = place_task.await.unwrap();
        let order_id = result.expect("placement should succeed");
        assert!(order_id.starts_with("ORD-"));
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        let result = system
            .order_client
            .place_order(home_address(), PaymentMethod::Cash, None)
            .await;

        assert_eq!(result, Err(OrderError::EmptyCart));
        assert_eq!(system.order_client.order_count().await, Ok(0));
    }

    #[tokio::test]
    async fn test_closed_restaurant_is_rejected() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        // Mithai Mahal is closed; browsing and carting still work
        system
            .cart_client
            .add_item(fixture_item("Rasmalai"), 2, vec![])
            .await
            .unwrap();

        let result = system
            .order_client
            .place_order(home_address(), PaymentMethod::Upi, None)
            .await;

        assert_eq!(result, Err(OrderError::RestaurantClosed("Mithai Mahal".to_string())));
    }

    #[tokio::test]
    async fn test_below_minimum_order_is_rejected() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        // One pani puri is 59, Chaat Chowk wants at least 99
        system
            .cart_client
            .add_item(fixture_item("Pani Puri"), 1, vec![])
            .await
            .unwrap();

        let result = system
            .order_client
            .place_order(home_address(), PaymentMethod::Wallet, None)
            .await;

        assert_eq!(
            result,
            Err(OrderError::BelowMinimumOrder {
                minimum: 99,
                subtotal: 59,
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_promo_is_rejected() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        system
            .cart_client
            .add_item(fixture_item("Masala Dosa Special"), 2, vec![])
            .await
            .unwrap();

        let result = system
            .order_client
            .place_order(home_address(), PaymentMethod::Upi, Some("WELCOME50".to_string()))
            .await;

        assert_eq!(result, Err(OrderError::InvalidPromoCode("WELCOME50".to_string())));

        // The failed attempt must not consume the cart
        assert_eq!(system.cart_client.item_count().await, Ok(2));
    }

    #[tokio::test]
    async fn test_promo_below_its_minimum_is_rejected() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        // 2x Plain Dosa is 178, over Dosa Junction's 149 minimum but under
        // the 299 the DOSA50 code wants
        system
            .cart_client
            .add_item(fixture_item("Plain Dosa"), 2, vec![])
            .await
            .unwrap();

        let result = system
            .order_client
            .place_order(home_address(), PaymentMethod::Upi, Some("DOSA50".to_string()))
            .await;

        assert_eq!(result, Err(OrderError::InvalidPromoCode("DOSA50".to_string())));
    }

    #[tokio::test]
    async fn test_unknown_restaurant_is_rejected() {
        // Empty catalog: the cart accepts items it is handed, but placement
        // cannot resolve the restaurant
        let system = StorefrontSystem::new(CatalogData::default());

        system
            .cart_client
            .add_item(fixture_item("Butter Chicken Combo"), 1, vec![])
            .await
            .unwrap();

        let result = system
            .order_client
            .place_order(home_address(), PaymentMethod::Upi, None)
            .await;

        assert_eq!(result, Err(OrderError::UnknownRestaurant("r1".to_string())));
    }

    #[tokio::test]
    async fn test_status_progression_and_cancellation() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        system
            .cart_client
            .add_item(fixture_item("Butter Chicken Combo"), 1, vec![])
            .await
            .unwrap();
        let order_id = system
            .order_client
            .place_order(home_address(), PaymentMethod::Upi, None)
            .await
            .unwrap();

        // Pending -> Confirmed -> Preparing -> OutForDelivery -> Delivered
        let mut last = OrderStatus::Pending;
        for _ in 0..4 {
            last = system.order_client.advance_status(order_id.clone()).await.unwrap();
        }
        assert_eq!(last, OrderStatus::Delivered);

        // Nothing moves past Delivered, and a settled order cannot be cancelled
        assert_eq!(
            system.order_client.advance_status(order_id.clone()).await,
            Err(OrderError::InvalidTransition { from: OrderStatus::Delivered })
        );
        assert_eq!(
            system.order_client.cancel_order(order_id).await,
            Err(OrderError::InvalidTransition { from: OrderStatus::Delivered })
        );

        // A fresh order can be cancelled while still in flight
        system
            .cart_client
            .add_item(fixture_item("Plain Dosa"), 2, vec![])
            .await
            .unwrap();
        let second_id = system
            .order_client
            .place_order(home_address(), PaymentMethod::Cash, None)
            .await
            .unwrap();
        system.order_client.cancel_order(second_id.clone()).await.unwrap();

        let cancelled = system.order_client.get_order(second_id).await.unwrap().unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_tracking_an_unknown_order() {
        let system = StorefrontSystem::new(fixtures::sample_catalog());

        assert_eq!(
            system.order_client.get_order("ORD-0-XXXXXX".to_string()).await,
            Ok(None)
        );
        assert_eq!(
            system.order_client.advance_status("ORD-0-XXXXXX".to_string()).await,
            Err(OrderError::NotFound("ORD-0-XXXXXX".to_string()))
        );
    }
}
