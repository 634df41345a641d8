use tokio::sync::oneshot;

use crate::catalog::{MenuSection, RestaurantFilters, SortBy};
use crate::domain::{
    Address, Cart, CustomizationOption, MenuItem, Order, OrderStatus, PaymentMethod, Restaurant,
    Review,
};
use crate::error::{CartError, CatalogError, OrderError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Everything the restaurants page asks for in one round trip: free-text
/// search, narrowing criteria, and the sort order, applied in that sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantQuery {
    pub search: Option<String>,
    pub filters: RestaurantFilters,
    pub sort: SortBy,
}

/// Typed message enums for actor communication. Each variant carries its
/// parameters and a oneshot channel for the response.

#[derive(Debug)]
pub enum CatalogRequest {
    ListRestaurants {
        query: RestaurantQuery,
        respond_to: ServiceResponse<Vec<Restaurant>, CatalogError>,
    },
    GetRestaurant {
        slug: String,
        respond_to: ServiceResponse<Option<Restaurant>, CatalogError>,
    },
    GetRestaurantById {
        id: String,
        respond_to: ServiceResponse<Option<Restaurant>, CatalogError>,
    },
    GetMenu {
        restaurant_id: String,
        respond_to: ServiceResponse<Vec<MenuSection>, CatalogError>,
    },
    GetReviews {
        restaurant_id: String,
        respond_to: ServiceResponse<Vec<Review>, CatalogError>,
    },
    PopularCuisines {
        respond_to: ServiceResponse<Vec<String>, CatalogError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum CartRequest {
    AddItem {
        item: MenuItem,
        quantity: u32,
        selected_options: Vec<CustomizationOption>,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    RemoveItem {
        item_id: String,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    SetQuantity {
        item_id: String,
        quantity: u32,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    Clear {
        respond_to: ServiceResponse<(), CartError>,
    },
    GetCart {
        respond_to: ServiceResponse<Cart, CartError>,
    },
    ItemCount {
        respond_to: ServiceResponse<u32, CartError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum OrderRequest {
    PlaceOrder {
        delivery_address: Address,
        payment: PaymentMethod,
        promo_code: Option<String>,
        respond_to: ServiceResponse<String, OrderError>,
    },
    GetOrder {
        id: String,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    AdvanceStatus {
        id: String,
        respond_to: ServiceResponse<OrderStatus, OrderError>,
    },
    CancelOrder {
        id: String,
        respond_to: ServiceResponse<(), OrderError>,
    },
    Shutdown,
    #[cfg(test)]
    OrderCount {
        respond_to: ServiceResponse<usize, OrderError>,
    },
}
