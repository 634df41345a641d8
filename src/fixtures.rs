//! Bundled mock data standing in for a real catalog source. Nothing reads
//! this module directly; the data is handed to the catalog actor at startup
//! so a real source can replace it wholesale.

use chrono::{Duration, Local};

use crate::catalog_service::CatalogData;
use crate::domain::{
    Address, CustomizationGroup, CustomizationOption, Discount, MenuItem, Offer, Restaurant,
    RestaurantLocation, Review, Rupees, SpiceLevel,
};

pub fn sample_catalog() -> CatalogData {
    CatalogData {
        restaurants: restaurants(),
        menu_items: menu_items(),
        reviews: reviews(),
    }
}

fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "r1".to_string(),
            slug: "spice-garden-mumbai".to_string(),
            name: "Spice Garden".to_string(),
            image: "/images/restaurants/spice-garden.jpg".to_string(),
            cuisines: vec!["North Indian".to_string(), "Punjabi".to_string()],
            rating: 4.5,
            total_reviews: 320,
            delivery_time_mins: 30,
            distance_km: 2.4,
            delivery_fee: 30,
            minimum_order: 199,
            is_open: true,
            is_pure_veg: false,
            location: RestaurantLocation {
                city: "Mumbai".to_string(),
                area: "Andheri West".to_string(),
                address: "23, Link Road, Andheri West".to_string(),
            },
            offers: vec![
                Offer {
                    id: "off-spice20".to_string(),
                    title: "20% OFF".to_string(),
                    description: "Use code SPICE20 on orders above ₹199".to_string(),
                    discount: Discount::Percent(20),
                    min_order_value: 199,
                    code: Some("SPICE20".to_string()),
                },
                Offer {
                    id: "off-freedel".to_string(),
                    title: "Free Delivery".to_string(),
                    description: "Delivery fee waived on orders above ₹499".to_string(),
                    discount: Discount::Flat(30),
                    min_order_value: 499,
                    code: None,
                },
            ],
        },
        Restaurant {
            id: "r2".to_string(),
            slug: "dosa-junction-bangalore".to_string(),
            name: "Dosa Junction".to_string(),
            image: "/images/restaurants/dosa-junction.jpg".to_string(),
            cuisines: vec!["South Indian".to_string()],
            rating: 4.7,
            total_reviews: 540,
            delivery_time_mins: 25,
            distance_km: 1.2,
            delivery_fee: 25,
            minimum_order: 149,
            is_open: true,
            is_pure_veg: true,
            location: RestaurantLocation {
                city: "Bangalore".to_string(),
                area: "Indiranagar".to_string(),
                address: "100 Feet Road, Indiranagar".to_string(),
            },
            offers: vec![Offer {
                id: "off-dosa50".to_string(),
                title: "Flat ₹50 OFF".to_string(),
                description: "Use code DOSA50 on orders above ₹299".to_string(),
                discount: Discount::Flat(50),
                min_order_value: 299,
                code: Some("DOSA50".to_string()),
            }],
        },
        Restaurant {
            id: "r3".to_string(),
            slug: "dragon-bowl-mumbai".to_string(),
            name: "Dragon Bowl".to_string(),
            image: "/images/restaurants/dragon-bowl.jpg".to_string(),
            cuisines: vec!["Chinese".to_string(), "Fast Food".to_string()],
            rating: 4.2,
            total_reviews: 210,
            delivery_time_mins: 35,
            distance_km: 3.1,
            delivery_fee: 40,
            minimum_order: 249,
            is_open: true,
            is_pure_veg: false,
            location: RestaurantLocation {
                city: "Mumbai".to_string(),
                area: "Lower Parel".to_string(),
                address: "Phoenix Mills Compound, Lower Parel".to_string(),
            },
            offers: vec![],
        },
        Restaurant {
            id: "r4".to_string(),
            slug: "punjabi-tadka-delhi".to_string(),
            name: "Punjabi Tadka".to_string(),
            image: "/images/restaurants/punjabi-tadka.jpg".to_string(),
            cuisines: vec!["North Indian".to_string(), "Punjabi".to_string()],
            rating: 4.4,
            total_reviews: 860,
            delivery_time_mins: 40,
            distance_km: 4.5,
            delivery_fee: 35,
            minimum_order: 299,
            is_open: true,
            is_pure_veg: false,
            location: RestaurantLocation {
                city: "Delhi".to_string(),
                area: "Connaught Place".to_string(),
                address: "Block M, Connaught Place".to_string(),
            },
            offers: vec![],
        },
        Restaurant {
            id: "r5".to_string(),
            slug: "bella-napoli-mumbai".to_string(),
            name: "Bella Napoli".to_string(),
            image: "/images/restaurants/bella-napoli.jpg".to_string(),
            cuisines: vec!["Italian".to_string()],
            rating: 4.6,
            total_reviews: 430,
            delivery_time_mins: 45,
            distance_km: 5.2,
            delivery_fee: 50,
            minimum_order: 399,
            is_open: true,
            is_pure_veg: false,
            location: RestaurantLocation {
                city: "Mumbai".to_string(),
                area: "Bandra West".to_string(),
                address: "Hill Road, Bandra West".to_string(),
            },
            offers: vec![],
        },
        Restaurant {
            id: "r6".to_string(),
            slug: "chaat-chowk-delhi".to_string(),
            name: "Chaat Chowk".to_string(),
            image: "/images/restaurants/chaat-chowk.jpg".to_string(),
            cuisines: vec!["Street Food".to_string(), "Fast Food".to_string()],
            rating: 4.1,
            total_reviews: 1500,
            delivery_time_mins: 20,
            distance_km: 0.8,
            delivery_fee: 20,
            minimum_order: 99,
            is_open: true,
            is_pure_veg: true,
            location: RestaurantLocation {
                city: "Delhi".to_string(),
                area: "Chandni Chowk".to_string(),
                address: "Paranthe Wali Gali, Chandni Chowk".to_string(),
            },
            offers: vec![],
        },
        Restaurant {
            id: "r7".to_string(),
            slug: "coastal-catch-kochi".to_string(),
            name: "Coastal Catch".to_string(),
            image: "/images/restaurants/coastal-catch.jpg".to_string(),
            cuisines: vec!["Seafood".to_string()],
            rating: 4.8,
            total_reviews: 260,
            delivery_time_mins: 50,
            distance_km: 6.3,
            delivery_fee: 60,
            minimum_order: 349,
            is_open: true,
            is_pure_veg: false,
            location: RestaurantLocation {
                city: "Kochi".to_string(),
                area: "Fort Kochi".to_string(),
                address: "Princess Street, Fort Kochi".to_string(),
            },
            offers: vec![],
        },
        Restaurant {
            id: "r8".to_string(),
            slug: "mithai-mahal-jaipur".to_string(),
            name: "Mithai Mahal".to_string(),
            image: "/images/restaurants/mithai-mahal.jpg".to_string(),
            cuisines: vec!["Desserts".to_string(), "Bakery".to_string()],
            rating: 4.3,
            total_reviews: 380,
            delivery_time_mins: 30,
            distance_km: 2.9,
            delivery_fee: 30,
            minimum_order: 149,
            is_open: false,
            is_pure_veg: true,
            location: RestaurantLocation {
                city: "Jaipur".to_string(),
                area: "Johari Bazaar".to_string(),
                address: "Shop 12, Johari Bazaar".to_string(),
            },
            offers: vec![],
        },
    ]
}

/// Base dish with the common defaults; callers override what differs.
fn dish(
    id: &str,
    restaurant_id: &str,
    name: &str,
    description: &str,
    price: Rupees,
    category: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: format!("/images/menu/{}.jpg", id),
        category: category.to_string(),
        is_veg: true,
        is_vegan: false,
        spice_level: None,
        is_available: true,
        customizations: vec![],
    }
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            is_veg: false,
            spice_level: Some(SpiceLevel::Medium),
            customizations: vec![CustomizationGroup {
                id: "m1-extras".to_string(),
                name: "Extras".to_string(),
                options: vec![
                    CustomizationOption {
                        id: "m1-naan".to_string(),
                        name: "Extra Naan".to_string(),
                        extra_price: 40,
                    },
                    CustomizationOption {
                        id: "m1-raita".to_string(),
                        name: "Extra Raita".to_string(),
                        extra_price: 30,
                    },
                ],
                required: false,
                max_selection: Some(2),
            }],
            ..dish(
                "m1",
                "r1",
                "Butter Chicken Combo",
                "Creamy tomato gravy with two butter naans and jeera rice",
                299,
                "Mains",
            )
        },
        MenuItem {
            spice_level: Some(SpiceLevel::Mild),
            ..dish(
                "m2",
                "r1",
                "Masala Dosa Special",
                "Crisp dosa with spiced potato filling, sambar, and two chutneys",
                149,
                "Dosa & South Indian",
            )
        },
        MenuItem {
            spice_level: Some(SpiceLevel::Hot),
            customizations: vec![CustomizationGroup {
                id: "m3-portion".to_string(),
                name: "Portion Size".to_string(),
                options: vec![
                    CustomizationOption {
                        id: "m3-half".to_string(),
                        name: "Half".to_string(),
                        extra_price: 0,
                    },
                    CustomizationOption {
                        id: "m3-full".to_string(),
                        name: "Full".to_string(),
                        extra_price: 80,
                    },
                ],
                required: true,
                max_selection: Some(1),
            }],
            ..dish(
                "m3",
                "r1",
                "Paneer Tikka",
                "Char-grilled cottage cheese with mint chutney",
                249,
                "Starters",
            )
        },
        dish(
            "m4",
            "r1",
            "Gulab Jamun",
            "Two pieces soaked in saffron syrup",
            99,
            "Desserts",
        ),
        MenuItem {
            is_veg: false,
            spice_level: Some(SpiceLevel::ExtraHot),
            is_available: false,
            ..dish(
                "m5",
                "r1",
                "Tandoori Chicken Full",
                "Whole chicken marinated overnight in smoked spices",
                449,
                "Starters",
            )
        },
        MenuItem {
            is_vegan: true,
            spice_level: Some(SpiceLevel::Mild),
            ..dish(
                "m6",
                "r2",
                "Plain Dosa",
                "Golden rice-and-lentil crepe with sambar",
                89,
                "Dosas",
            )
        },
        dish(
            "m7",
            "r2",
            "Filter Coffee",
            "South Indian filter coffee in a steel tumbler",
            49,
            "Beverages",
        ),
        MenuItem {
            is_vegan: true,
            spice_level: Some(SpiceLevel::Medium),
            ..dish(
                "m8",
                "r3",
                "Hakka Noodles",
                "Wok-tossed noodles with crunchy vegetables",
                199,
                "Noodles",
            )
        },
        MenuItem {
            is_vegan: true,
            spice_level: Some(SpiceLevel::Hot),
            ..dish(
                "m9",
                "r6",
                "Pani Puri",
                "Eight puris with spicy mint water and ragda",
                59,
                "Chaat",
            )
        },
        dish(
            "m10",
            "r8",
            "Rasmalai",
            "Soft chenna discs in cardamom milk",
            120,
            "Sweets",
        ),
    ]
}

fn review(
    id: &str,
    restaurant_id: &str,
    user_name: &str,
    rating: f32,
    comment: &str,
    days_ago: i64,
    helpful: u32,
) -> Review {
    Review {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: Local::now() - Duration::days(days_ago),
        helpful,
    }
}

fn reviews() -> Vec<Review> {
    vec![
        review(
            "rv1",
            "r1",
            "Rohan Mehta",
            5.0,
            "Best butter chicken in Andheri. Rich gravy and generous portions.",
            3,
            24,
        ),
        review(
            "rv2",
            "r1",
            "Priya Sharma",
            4.5,
            "Paneer tikka was smoky and fresh. Delivery was ten minutes late though.",
            12,
            11,
        ),
        review(
            "rv3",
            "r1",
            "Arjun Nair",
            4.0,
            "Solid weeknight order. The dosa surprised me at a Punjabi place.",
            34,
            3,
        ),
        review(
            "rv4",
            "r2",
            "Lakshmi Rao",
            5.0,
            "Crispest dosa I have had outside Bangalore's darshinis.",
            6,
            18,
        ),
    ]
}

/// Saved addresses shown on the checkout page.
pub fn sample_addresses() -> Vec<Address> {
    vec![
        Address {
            id: "addr-1".to_string(),
            label: "Home".to_string(),
            street: "23, Link Road, Andheri West".to_string(),
            landmark: Some("Near Metro Station".to_string()),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400053".to_string(),
            phone_number: "+91 98765 43210".to_string(),
        },
        Address {
            id: "addr-2".to_string(),
            label: "Work".to_string(),
            street: "45, Office Complex, BKC".to_string(),
            landmark: None,
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400051".to_string(),
            phone_number: "+91 98765 43210".to_string(),
        },
    ]
}
