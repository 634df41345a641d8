mod app_system;
mod cart_service;
mod catalog;
mod catalog_service;
mod clients;
mod display;
mod domain;
mod error;
mod fixtures;
mod location;
mod messages;
mod order_service;
mod pricing;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use tracing::{debug, info, Instrument};

use crate::app_system::{setup_tracing, StorefrontSystem};
use crate::catalog::{MenuSection, RestaurantFilters, SortBy};
use crate::domain::{MenuItem, PaymentMethod, Restaurant};
use crate::messages::RestaurantQuery;

fn find_item(sections: &[MenuSection], name: &str) -> Option<MenuItem> {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.name == name)
        .cloned()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting the tiffin storefront");

    let span = tracing::info_span!("location_detection");
    let here = async {
        info!("Detecting delivery location");
        location::detect_location().await
    }
    .instrument(span)
    .await;
    debug!(lat = here.lat, lng = here.lng, "Location coordinates");
    info!(city = %here.city, area = %here.area, "Delivering to");

    // Create the entire storefront system (starts all services)
    let system = StorefrontSystem::new(fixtures::sample_catalog());

    // Discovery: what the restaurants page asks for
    let span = tracing::info_span!("discovery");
    let restaurant: Restaurant = async {
        let cuisines = system
            .catalog_client
            .popular_cuisines()
            .await
            .map_err(|e| e.to_string())?;
        if let Some(top) = cuisines.first() {
            info!(top_cuisine = %top, cuisine_count = cuisines.len(), "Popular cuisines ranked");
        }

        let query = RestaurantQuery {
            search: Some("spice".to_string()),
            filters: RestaurantFilters {
                min_rating: Some(4.0),
                ..Default::default()
            },
            sort: SortBy::Rating,
        };
        let results = system
            .catalog_client
            .list_restaurants(query)
            .await
            .map_err(|e| e.to_string())?;
        info!(result_count = results.len(), "Restaurants matched");

        // Open the detail page of the first hit, by slug, like the router does
        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| "No restaurants matched the search".to_string())?;
        system
            .catalog_client
            .get_restaurant(first.slug.clone())
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("Restaurant page missing for {}", first.slug))
    }
    .instrument(span)
    .await?;

    info!(
        restaurant = %restaurant.name,
        rating = restaurant.rating,
        reviews = restaurant.total_reviews,
        promised = %display::format_delivery_time(restaurant.delivery_time_mins),
        distance = %display::format_distance(restaurant.distance_km),
        area = %restaurant.location.area,
        city = %restaurant.location.city,
        address = %restaurant.location.address,
        "Selected restaurant"
    );

    let reviews = system
        .catalog_client
        .get_reviews(restaurant.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    for review in reviews.iter().take(2) {
        info!(
            by = %review.user_name,
            rating = %review.rating,
            on = %display::format_date(&review.date),
            helpful = review.helpful,
            comment = %review.comment,
            "Review"
        );
    }

    // Build the cart from the menu
    let span = tracing::info_span!("cart_building");
    let subtotal = async {
        let sections = system
            .catalog_client
            .get_menu(restaurant.id.clone())
            .await
            .map_err(|e| e.to_string())?;
        for section in &sections {
            info!(category = %section.category, dish_count = section.items.len(), "Menu section");
        }
        if let Some(section) = sections.first() {
            for item in &section.items {
                info!(
                    dish = %item.name,
                    price = %display::format_price(item.price),
                    veg = display::veg_indicator(item.is_veg).label,
                    vegan = item.is_vegan,
                    spice = %display::spice_level_emoji(item.spice_level),
                    "On the menu"
                );
            }
        }

        let combo = find_item(&sections, "Butter Chicken Combo")
            .ok_or("Butter Chicken Combo missing from menu")?;
        let naan = combo
            .customizations
            .iter()
            .flat_map(|group| group.options.iter())
            .find(|option| option.name == "Extra Naan")
            .cloned()
            .ok_or("Extra Naan option missing")?;
        system
            .cart_client
            .add_item(combo, 2, vec![naan])
            .await
            .map_err(|e| e.to_string())?;

        let dosa = find_item(&sections, "Masala Dosa Special")
            .ok_or("Masala Dosa Special missing from menu")?;
        system
            .cart_client
            .add_item(dosa.clone(), 2, vec![])
            .await
            .map_err(|e| e.to_string())?;
        // One dosa is plenty after all
        system
            .cart_client
            .set_quantity(dosa.id, 1)
            .await
            .map_err(|e| e.to_string())?;

        // A dessert, briefly
        let jamun = find_item(&sections, "Gulab Jamun").ok_or("Gulab Jamun missing from menu")?;
        let jamun_id = jamun.id.clone();
        system
            .cart_client
            .add_item(jamun, 1, vec![])
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .remove_item(jamun_id)
            .await
            .map_err(|e| e.to_string())?;

        let count = system.cart_client.item_count().await.map_err(|e| e.to_string())?;
        let cart = system.cart_client.get_cart().await.map_err(|e| e.to_string())?;
        let subtotal = pricing::cart_subtotal(&cart.items);
        info!(
            item_count = count,
            subtotal = %display::format_price(subtotal),
            "Cart ready"
        );
        Ok::<_, String>(subtotal)
    }
    .instrument(span)
    .await?;

    if let Some(offer) = pricing::best_offer(&restaurant.offers, subtotal) {
        info!(
            offer = %offer.title,
            details = %offer.description,
            worth = %display::format_price(offer.discount_on(subtotal)),
            "Best offer for this cart"
        );
    }

    // Checkout
    let span = tracing::info_span!("checkout");
    let order_id = async {
        let address = fixtures::sample_addresses()
            .into_iter()
            .find(|a| a.label == "Home")
            .ok_or("No saved home address")?;
        info!(label = %address.label, deliver_to = %address, phone = %address.phone_number, "Address selected");

        system
            .order_client
            .place_order(address, PaymentMethod::Upi, Some("SPICE20".to_string()))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order_id, "Order placed");

    // Tracking
    let span = tracing::info_span!("order_tracking");
    async {
        let order = system
            .order_client
            .get_order(order_id.clone())
            .await
            .map_err(|e| e.to_string())?
            .ok_or("Order missing from the store")?;

        info!(
            from = %order.restaurant_name,
            status = %order.status,
            payment = %order.payment,
            placed_at = %display::format_date_time(&order.created_at),
            "Tracking order"
        );
        for line in &order.items {
            info!(
                dish = %line.menu_item.name,
                quantity = line.quantity,
                line_total = %display::format_price(line.line_total()),
                "Order line"
            );
        }
        info!(
            subtotal = %display::format_price(order.totals.subtotal),
            delivery = %display::format_price(order.totals.delivery_fee),
            taxes = %display::format_price(order.totals.taxes),
            discount = %display::format_price(order.totals.discount),
            total = %display::format_price(order.totals.total),
            "Bill"
        );
        if let Some(eta) = order.estimated_delivery_at {
            info!(eta = %display::format_time(&eta), "Estimated delivery");
        }
        if let Some(info) = system
            .catalog_client
            .get_restaurant_by_id(order.restaurant_id.clone())
            .await
            .map_err(|e| e.to_string())?
        {
            info!(restaurant = %info.name, address = %info.location.address, "Preparing at");
        }

        let status = system
            .order_client
            .advance_status(order_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(status = %status, "Kitchen update");
        let status = system
            .order_client
            .advance_status(order_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(status = %status, "Kitchen update");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // A second order, abandoned before the kitchen starts
    let span = tracing::info_span!("second_order");
    async {
        let junction = system
            .catalog_client
            .get_restaurant("dosa-junction-bangalore".to_string())
            .await
            .map_err(|e| e.to_string())?
            .ok_or("Dosa Junction missing")?;
        let sections = system
            .catalog_client
            .get_menu(junction.id.clone())
            .await
            .map_err(|e| e.to_string())?;
        let dosa = find_item(&sections, "Plain Dosa").ok_or("Plain Dosa missing from menu")?;
        system
            .cart_client
            .add_item(dosa, 2, vec![])
            .await
            .map_err(|e| e.to_string())?;

        let address = fixtures::sample_addresses()
            .into_iter()
            .find(|a| a.label == "Work")
            .ok_or("No saved work address")?;
        let second_id = system
            .order_client
            .place_order(address, PaymentMethod::Cash, None)
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %second_id, "Second order placed");

        system
            .order_client
            .cancel_order(second_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %second_id, "Changed our mind, order cancelled");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront run completed");
    Ok(())
}
