use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::catalog::{self, MenuSection};
use crate::clients::CatalogClient;
use crate::domain::{MenuItem, Restaurant, Review};
use crate::error::CatalogError;
use crate::messages::{CatalogRequest, RestaurantQuery, ServiceResponse};

/// The full dataset behind the storefront. Injected at startup so a real
/// data source can replace the bundled fixtures wholesale.
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub reviews: Vec<Review>,
}

/// Read-only catalog actor. Owns the restaurant, menu, and review
/// collections and answers every discovery query with fresh copies.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    restaurants: Vec<Restaurant>,
    menu_items: Vec<MenuItem>,
    reviews: Vec<Review>,
}

impl CatalogService {
    pub fn new(buffer_size: usize, data: CatalogData) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            restaurants: data.restaurants,
            menu_items: data.menu_items,
            reviews: data.reviews,
        };
        let client = CatalogClient::new(sender);
        (service, client)
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!(
            restaurant_count = self.restaurants.len(),
            menu_item_count = self.menu_items.len(),
            "CatalogService starting"
        );
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::ListRestaurants { query, respond_to } => {
                    self.handle_list_restaurants(query, respond_to);
                }
                CatalogRequest::GetRestaurant { slug, respond_to } => {
                    self.handle_get_restaurant(slug, respond_to);
                }
                CatalogRequest::GetRestaurantById { id, respond_to } => {
                    self.handle_get_restaurant_by_id(id, respond_to);
                }
                CatalogRequest::GetMenu { restaurant_id, respond_to } => {
                    self.handle_get_menu(restaurant_id, respond_to);
                }
                CatalogRequest::GetReviews { restaurant_id, respond_to } => {
                    self.handle_get_reviews(restaurant_id, respond_to);
                }
                CatalogRequest::PopularCuisines { respond_to } => {
                    self.handle_popular_cuisines(respond_to);
                }
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
            }
        }
        info!("CatalogService stopped");
    }

    /// Search, filter, and sort, in the order the discovery page applies
    /// them.
    #[instrument(skip(self, query, respond_to))]
    fn handle_list_restaurants(
        &self,
        query: RestaurantQuery,
        respond_to: ServiceResponse<Vec<Restaurant>, CatalogError>,
    ) {
        debug!("Processing list_restaurants request");

        let mut results = match query.search.as_deref() {
            Some(text) => catalog::search_restaurants(&self.restaurants, text),
            None => self.restaurants.clone(),
        };
        results = catalog::filter_restaurants(&results, &query.filters);
        results = catalog::sort_restaurants(&results, query.sort);

        info!(result_count = results.len(), "Restaurants listed");
        let _ = respond_to.send(Ok(results));
    }

    #[instrument(fields(slug = %slug), skip(self, respond_to))]
    fn handle_get_restaurant(
        &self,
        slug: String,
        respond_to: ServiceResponse<Option<Restaurant>, CatalogError>,
    ) {
        debug!("Processing get_restaurant request");
        let restaurant = catalog::restaurant_by_slug(&self.restaurants, &slug).cloned();
        match &restaurant {
            Some(restaurant) => info!(restaurant_name = %restaurant.name, "Restaurant found"),
            None => debug!("Restaurant not found"),
        }
        let _ = respond_to.send(Ok(restaurant));
    }

    #[instrument(fields(restaurant_id = %id), skip(self, respond_to))]
    fn handle_get_restaurant_by_id(
        &self,
        id: String,
        respond_to: ServiceResponse<Option<Restaurant>, CatalogError>,
    ) {
        debug!("Processing get_restaurant_by_id request");
        let restaurant = catalog::restaurant_by_id(&self.restaurants, &id).cloned();
        match &restaurant {
            Some(restaurant) => info!(restaurant_name = %restaurant.name, "Restaurant found"),
            None => debug!("Restaurant not found"),
        }
        let _ = respond_to.send(Ok(restaurant));
    }

    #[instrument(fields(restaurant_id = %restaurant_id), skip(self, respond_to))]
    fn handle_get_menu(
        &self,
        restaurant_id: String,
        respond_to: ServiceResponse<Vec<MenuSection>, CatalogError>,
    ) {
        debug!("Processing get_menu request");
        let items = catalog::menu_for_restaurant(&self.menu_items, &restaurant_id);
        let sections = catalog::group_menu_by_category(&items);
        info!(section_count = sections.len(), "Menu grouped");
        let _ = respond_to.send(Ok(sections));
    }

    #[instrument(fields(restaurant_id = %restaurant_id), skip(self, respond_to))]
    fn handle_get_reviews(
        &self,
        restaurant_id: String,
        respond_to: ServiceResponse<Vec<Review>, CatalogError>,
    ) {
        debug!("Processing get_reviews request");
        let reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|review| review.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        info!(review_count = reviews.len(), "Reviews collected");
        let _ = respond_to.send(Ok(reviews));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_popular_cuisines(&self, respond_to: ServiceResponse<Vec<String>, CatalogError>) {
        debug!("Processing popular_cuisines request");
        let cuisines = catalog::popular_cuisines(&self.restaurants);
        info!(cuisine_count = cuisines.len(), "Cuisines ranked");
        let _ = respond_to.send(Ok(cuisines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortBy;
    use crate::fixtures;

    fn start_catalog() -> CatalogClient {
        let (service, client) = CatalogService::new(10, fixtures::sample_catalog());
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn test_list_applies_search_then_filter_then_sort() {
        let client = start_catalog();

        let query = RestaurantQuery {
            search: Some("indian".to_string()),
            filters: crate::catalog::RestaurantFilters {
                min_rating: Some(4.5),
                ..Default::default()
            },
            sort: SortBy::Rating,
        };
        let results = client.list_restaurants(query).await.unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Dosa Junction", "Spice Garden"]);
    }

    #[tokio::test]
    async fn test_menu_comes_back_grouped_by_category() {
        let client = start_catalog();

        let sections = client.get_menu("r1".to_string()).await.unwrap();
        let headings: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(headings, ["Mains", "Dosa & South Indian", "Starters", "Desserts"]);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_none_not_an_error() {
        let client = start_catalog();
        assert_eq!(client.get_restaurant("no-such-place".to_string()).await, Ok(None));
        assert_eq!(client.get_menu("no-such-id".to_string()).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_reviews_are_scoped_to_the_restaurant() {
        let client = start_catalog();
        let reviews = client.get_reviews("r1".to_string()).await.unwrap();
        assert!(!reviews.is_empty());
        assert!(reviews.iter().all(|r| r.restaurant_id == "r1"));
    }

    #[tokio::test]
    async fn test_requests_fail_cleanly_after_shutdown() {
        let (service, client) = CatalogService::new(10, CatalogData::default());
        let handle = tokio::spawn(service.run());

        client.shutdown().await.unwrap();
        handle.await.unwrap();

        let result = client.popular_cuisines().await;
        assert_eq!(
            result,
            Err(CatalogError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
