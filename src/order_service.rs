use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, Utc};
use rand::Rng;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::domain::{Address, Order, OrderStatus, PaymentMethod};
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};
use crate::pricing;

const ORDER_ID_PREFIX: &str = "ORD";

/// Builds an order id of the form `ORD-{unix millis}-{6 base-36 chars}`.
/// Clock plus a short random suffix is unique enough while orders never
/// leave this process.
pub fn generate_order_id() -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("{}-{}-{}", ORDER_ID_PREFIX, Utc::now().timestamp_millis(), suffix)
}

/// When a kitchen promising `delivery_time_mins` should arrive, counted from
/// now on the host clock.
pub fn estimated_delivery_at(delivery_time_mins: u32) -> DateTime<Local> {
    Local::now() + Duration::minutes(i64::from(delivery_time_mins))
}

/// Checkout orchestrator. Validates the cart against the catalog, prices the
/// order, and keeps every placed order in memory; the tracking flow reads
/// the same orders checkout writes.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    catalog_client: CatalogClient,
    cart_client: CartClient,
    orders: HashMap<String, Order>,
}

impl OrderService {
    pub fn new(
        buffer_size: usize,
        catalog_client: CatalogClient,
        cart_client: CartClient,
    ) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            catalog_client,
            cart_client,
            orders: HashMap::new(),
        };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::PlaceOrder { delivery_address, payment, promo_code, respond_to } => {
                    self.handle_place_order(delivery_address, payment, promo_code, respond_to)
                        .await;
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    self.handle_get_order(id, respond_to);
                }
                OrderRequest::AdvanceStatus { id, respond_to } => {
                    self.handle_advance_status(id, respond_to);
                }
                OrderRequest::CancelOrder { id, respond_to } => {
                    self.handle_cancel_order(id, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
                #[cfg(test)]
                OrderRequest::OrderCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.orders.len()));
                }
            }
        }
        info!("OrderService stopped");
    }

    #[instrument(fields(payment = %payment), skip(self, delivery_address, promo_code, respond_to))]
    async fn handle_place_order(
        &mut self,
        delivery_address: Address,
        payment: PaymentMethod,
        promo_code: Option<String>,
        respond_to: ServiceResponse<String, OrderError>,
    ) {
        info!("Processing place_order request");

        // Step 1: Snapshot the cart
        let cart = match self.cart_client.get_cart().await {
            Ok(cart) => cart,
            Err(e) => {
                error!(error = %e, "Cart snapshot failed");
                let _ = respond_to.send(Err(OrderError::ActorCommunicationError(format!(
                    "Cart snapshot failed: {}",
                    e
                ))));
                return;
            }
        };
        let restaurant_id = match cart.restaurant_id.clone() {
            Some(id) if !cart.is_empty() => id,
            _ => {
                error!("Cart is empty");
                let _ = respond_to.send(Err(OrderError::EmptyCart));
                return;
            }
        };

        // Step 2: Validate the restaurant
        let restaurant = match self.catalog_client.get_restaurant_by_id(restaurant_id.clone()).await
        {
            Ok(Some(restaurant)) => {
                info!(restaurant_name = %restaurant.name, "Restaurant validation successful");
                restaurant
            }
            Ok(None) => {
                error!("Restaurant not found");
                let _ = respond_to.send(Err(OrderError::UnknownRestaurant(restaurant_id)));
                return;
            }
            Err(e) => {
                error!(error = %e, "Restaurant validation failed");
                let _ = respond_to.send(Err(OrderError::ActorCommunicationError(format!(
                    "Restaurant validation failed: {}",
                    e
                ))));
                return;
            }
        };
        if !restaurant.is_open {
            error!(restaurant_name = %restaurant.name, "Restaurant is closed");
            let _ = respond_to.send(Err(OrderError::RestaurantClosed(restaurant.name)));
            return;
        }

        let subtotal = pricing::cart_subtotal(&cart.items);
        if subtotal < restaurant.minimum_order {
            error!(
                subtotal = subtotal,
                minimum = restaurant.minimum_order,
                "Below minimum order"
            );
            let _ = respond_to.send(Err(OrderError::BelowMinimumOrder {
                minimum: restaurant.minimum_order,
                subtotal,
            }));
            return;
        }

        // Step 3: Resolve the promo code
        let discount = match &promo_code {
            Some(code) => match pricing::promo_discount(&restaurant.offers, code, subtotal) {
                Some(discount) => {
                    info!(discount = discount, "Promo code applied");
                    discount
                }
                None => {
                    error!(code = %code, "Promo code rejected");
                    let _ = respond_to.send(Err(OrderError::InvalidPromoCode(code.clone())));
                    return;
                }
            },
            None => 0,
        };

        // Step 4: Price and store the order
        let totals = pricing::order_totals(subtotal, restaurant.delivery_fee, discount);
        let order = Order {
            id: generate_order_id(),
            restaurant_id,
            restaurant_name: restaurant.name,
            items: cart.items,
            totals,
            status: OrderStatus::Pending,
            delivery_address,
            payment,
            created_at: Local::now(),
            estimated_delivery_at: Some(estimated_delivery_at(restaurant.delivery_time_mins)),
        };
        let order_id = order.id.clone();
        self.orders.insert(order_id.clone(), order);

        // Step 5: Clear the cart. The order stands even if this fails.
        if let Err(e) = self.cart_client.clear().await {
            warn!(error = %e, "Cart clear failed after placement");
        }

        info!(order_id = %order_id, total = totals.total, "Order placed");
        let _ = respond_to.send(Ok(order_id));
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_get_order(&self, id: String, respond_to: ServiceResponse<Option<Order>, OrderError>) {
        debug!("Processing get_order request");
        let order = self.orders.get(&id).cloned();
        match &order {
            Some(order) => info!(status = %order.status, "Order found"),
            None => debug!("Order not found"),
        }
        let _ = respond_to.send(Ok(order));
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_advance_status(
        &mut self,
        id: String,
        respond_to: ServiceResponse<OrderStatus, OrderError>,
    ) {
        debug!("Processing advance_status request");
        let result = match self.orders.get_mut(&id) {
            Some(order) => match order.status.next() {
                Some(next) => {
                    order.status = next;
                    info!(status = %next, "Order status advanced");
                    Ok(next)
                }
                None => {
                    error!(status = %order.status, "No further status change");
                    Err(OrderError::InvalidTransition { from: order.status })
                }
            },
            None => {
                error!("Order not found");
                Err(OrderError::NotFound(id))
            }
        };
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_cancel_order(&mut self, id: String, respond_to: ServiceResponse<(), OrderError>) {
        debug!("Processing cancel_order request");
        let result = match self.orders.get_mut(&id) {
            Some(order) if order.status.is_terminal() => {
                error!(status = %order.status, "Cannot cancel a settled order");
                Err(OrderError::InvalidTransition { from: order.status })
            }
            Some(order) => {
                order.status = OrderStatus::Cancelled;
                info!("Order cancelled");
                Ok(())
            }
            None => {
                error!("Order not found");
                Err(OrderError::NotFound(id))
            }
        };
        let _ = respond_to.send(result);
    }
}
