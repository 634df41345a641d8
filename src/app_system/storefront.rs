use tracing::{error, info, instrument};

use crate::cart_service::CartService;
use crate::catalog_service::{CatalogData, CatalogService};
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::order_service::OrderService;

/// The main application system that wires the storefront actors together.
///
/// Responsible for starting the actors in dependency order, injecting
/// clients, and shutting everything down cleanly.
pub struct StorefrontSystem {
    pub catalog_client: CatalogClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Create and start the entire actor system over the given catalog data.
    ///
    /// Catalog and cart come up first since they have no dependencies; the
    /// order service starts last with both their clients injected.
    #[instrument(name = "storefront_system", skip(data))]
    pub fn new(data: CatalogData) -> Self {
        let mut handles = Vec::new();

        info!("Starting storefront system");

        let (catalog_service, catalog_client) = CatalogService::new(100, data);
        handles.push(tokio::spawn(catalog_service.run()));

        let (cart_service, cart_client) = CartService::new(100);
        handles.push(tokio::spawn(cart_service.run()));

        let (order_service, order_client) =
            OrderService::new(100, catalog_client.clone(), cart_client.clone());
        handles.push(tokio::spawn(order_service.run()));

        info!("Storefront system started successfully");

        Self {
            catalog_client,
            cart_client,
            order_client,
            handles,
        }
    }

    /// Gracefully shutdown the entire actor system: the order actor first
    /// since it depends on the other two, then catalog and cart, then wait
    /// for every task. Shutdown errors are logged but never abort the rest.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system");

        let _ = self.order_client.shutdown().await;
        let _ = self.cart_client.shutdown().await;
        let _ = self.catalog_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Storefront system shutdown complete");
        Ok(())
    }
}
