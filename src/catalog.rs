//! Pure catalog queries: filtering, search, sorting, and menu grouping.
//!
//! Every function takes the collection by reference and returns a fresh
//! collection. Inputs are never mutated, so two calls over the same data
//! always agree.

use crate::domain::{MenuItem, Restaurant, Rupees};

/// Criteria for narrowing the restaurant list. Absent criteria are no-ops;
/// present criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilters {
    /// Keep restaurants sharing at least one of these cuisine tags.
    pub cuisines: Vec<String>,
    /// Keep restaurants rated at or above this threshold.
    pub min_rating: Option<f32>,
    /// Keep pure-veg restaurants only.
    pub pure_veg_only: bool,
    /// Keep restaurants promising delivery within this many minutes.
    pub max_delivery_time_mins: Option<u32>,
    /// Keep restaurants whose minimum order falls inside these inclusive
    /// rupee bounds.
    pub price_range: Option<(Rupees, Rupees)>,
}

/// Sort orders for the restaurant list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Combined rating and delivery-time score, best first.
    #[default]
    Relevance,
    /// Highest rated first.
    Rating,
    /// Fastest delivery first.
    DeliveryTime,
    /// Cheapest minimum order first.
    CostLowToHigh,
    CostHighToLow,
}

pub fn filter_restaurants(
    restaurants: &[Restaurant],
    filters: &RestaurantFilters,
) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| {
            if !filters.cuisines.is_empty()
                && !r.cuisines.iter().any(|c| filters.cuisines.contains(c))
            {
                return false;
            }
            if let Some(min) = filters.min_rating {
                if r.rating < min {
                    return false;
                }
            }
            if filters.pure_veg_only && !r.is_pure_veg {
                return false;
            }
            if let Some(max) = filters.max_delivery_time_mins {
                if r.delivery_time_mins > max {
                    return false;
                }
            }
            if let Some((low, high)) = filters.price_range {
                if r.minimum_order < low || r.minimum_order > high {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match against name, cuisine tags, and area.
/// Blank queries match everything.
pub fn search_restaurants(restaurants: &[Restaurant], query: &str) -> Vec<Restaurant> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return restaurants.to_vec();
    }
    restaurants
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.cuisines.iter().any(|c| c.to_lowercase().contains(&needle))
                || r.location.area.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort on a copy; equal restaurants keep their listing order.
pub fn sort_restaurants(restaurants: &[Restaurant], sort: SortBy) -> Vec<Restaurant> {
    let mut sorted = restaurants.to_vec();
    match sort {
        SortBy::Relevance => {
            sorted.sort_by(|a, b| relevance_score(b).total_cmp(&relevance_score(a)))
        }
        SortBy::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::DeliveryTime => sorted.sort_by_key(|r| r.delivery_time_mins),
        SortBy::CostLowToHigh => sorted.sort_by_key(|r| r.minimum_order),
        SortBy::CostHighToLow => sorted.sort_by_key(|r| std::cmp::Reverse(r.minimum_order)),
    }
    sorted
}

/// Default ranking: high ratings help, long delivery times hurt.
fn relevance_score(restaurant: &Restaurant) -> f64 {
    f64::from(restaurant.rating) * 10.0 - f64::from(restaurant.delivery_time_mins) / 10.0
}

/// Up to the ten most common cuisine tags, most frequent first. Ties keep
/// first-appearance order.
pub fn popular_cuisines(restaurants: &[Restaurant]) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for restaurant in restaurants {
        for cuisine in &restaurant.cuisines {
            match counts.iter_mut().find(|(name, _)| name == cuisine) {
                Some((_, count)) => *count += 1,
                None => counts.push((cuisine.clone(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(10);
    counts.into_iter().map(|(name, _)| name).collect()
}

pub fn restaurant_by_slug<'a>(restaurants: &'a [Restaurant], slug: &str) -> Option<&'a Restaurant> {
    restaurants.iter().find(|r| r.slug == slug)
}

pub fn restaurant_by_id<'a>(restaurants: &'a [Restaurant], id: &str) -> Option<&'a Restaurant> {
    restaurants.iter().find(|r| r.id == id)
}

pub fn menu_for_restaurant(items: &[MenuItem], restaurant_id: &str) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.restaurant_id == restaurant_id)
        .cloned()
        .collect()
}

/// A category heading plus its dishes, as rendered on the menu page.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}

/// Partition menu items by category. Categories appear in first-seen order
/// and items keep their order within each category.
pub fn group_menu_by_category(items: &[MenuItem]) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();
    for item in items {
        match sections.iter_mut().find(|s| s.category == item.category) {
            Some(section) => section.items.push(item.clone()),
            None => sections.push(MenuSection {
                category: item.category.clone(),
                items: vec![item.clone()],
            }),
        }
    }
    sections
}
