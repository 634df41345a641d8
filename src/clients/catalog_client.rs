use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::catalog::MenuSection;
use crate::client_method;
use crate::domain::{Restaurant, Review};
use crate::error::CatalogError;
use crate::messages::{CatalogRequest, RestaurantQuery};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    // Shutdown carries no response channel, so it stays a manual method.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), String> {
        debug!("Sending shutdown request");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|e| e.to_string())
    }
}

client_method!(CatalogClient => fn list_restaurants(query: RestaurantQuery) -> Vec<Restaurant> as CatalogRequest::ListRestaurants, Error = CatalogError);
client_method!(CatalogClient => fn get_restaurant(slug: String) -> Option<Restaurant> as CatalogRequest::GetRestaurant, Error = CatalogError);
client_method!(CatalogClient => fn get_restaurant_by_id(id: String) -> Option<Restaurant> as CatalogRequest::GetRestaurantById, Error = CatalogError);
client_method!(CatalogClient => fn get_menu(restaurant_id: String) -> Vec<MenuSection> as CatalogRequest::GetMenu, Error = CatalogError);
client_method!(CatalogClient => fn get_reviews(restaurant_id: String) -> Vec<Review> as CatalogRequest::GetReviews, Error = CatalogError);
client_method!(CatalogClient => fn popular_cuisines() -> Vec<String> as CatalogRequest::PopularCuisines, Error = CatalogError);
