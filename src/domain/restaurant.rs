use super::Rupees;

/// A restaurant listing as shown on the discovery surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    /// URL-friendly identifier used by the restaurant detail route.
    pub slug: String,
    pub name: String,
    #[allow(dead_code)]
    pub image: String,
    /// Cuisine tags. Never empty for a well-formed listing.
    pub cuisines: Vec<String>,
    /// Average rating in [0, 5].
    pub rating: f32,
    pub total_reviews: u32,
    /// Promised delivery time in minutes.
    pub delivery_time_mins: u32,
    /// Distance from the delivery location in kilometres.
    pub distance_km: f64,
    pub delivery_fee: Rupees,
    pub minimum_order: Rupees,
    pub is_open: bool,
    pub is_pure_veg: bool,
    pub location: RestaurantLocation,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantLocation {
    pub city: String,
    pub area: String,
    pub address: String,
}

/// A promotion attached to a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    #[allow(dead_code)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount: Discount,
    /// Subtotal required before the offer applies.
    pub min_order_value: Rupees,
    /// Promo code the customer can type at checkout, if the offer has one.
    pub code: Option<String>,
}

/// How an offer reduces the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Percentage off the subtotal, floored to whole rupees.
    Percent(u32),
    /// Flat amount off.
    Flat(Rupees),
}

impl Offer {
    /// Rupee value of this offer against `subtotal`. Zero when the subtotal
    /// has not reached `min_order_value`.
    pub fn discount_on(&self, subtotal: Rupees) -> Rupees {
        if subtotal < self.min_order_value {
            return 0;
        }
        match self.discount {
            Discount::Percent(pct) => subtotal * Rupees::from(pct) / 100,
            Discount::Flat(amount) => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(discount: Discount, min_order_value: Rupees) -> Offer {
        Offer {
            id: "off-test".to_string(),
            title: "Test offer".to_string(),
            description: String::new(),
            discount,
            min_order_value,
            code: None,
        }
    }

    #[test]
    fn test_percent_discount_floors_to_whole_rupees() {
        // 15% of 333 is 49.95, floored to 49
        assert_eq!(offer(Discount::Percent(15), 0).discount_on(333), 49);
    }

    #[test]
    fn test_offer_below_minimum_is_worth_nothing() {
        assert_eq!(offer(Discount::Flat(50), 299).discount_on(298), 0);
        assert_eq!(offer(Discount::Flat(50), 299).discount_on(299), 50);
    }

    #[test]
    fn test_percent_discount_at_twenty() {
        assert_eq!(offer(Discount::Percent(20), 199).discount_on(747), 149);
    }
}
