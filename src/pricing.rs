//! Money derivations: cart subtotals, GST, order totals, and offer
//! resolution. All arithmetic stays in whole rupees.

use crate::domain::{CartItem, Offer, OrderTotals, Rupees};

/// GST percentage applied to the food subtotal.
const GST_RATE_PERCENT: Rupees = 5;

/// Sum of line totals. An empty cart costs nothing.
pub fn cart_subtotal(items: &[CartItem]) -> Rupees {
    items.iter().map(CartItem::line_total).sum()
}

/// Flat 5% GST, rounded half-up to whole rupees.
pub fn gst(subtotal: Rupees) -> Rupees {
    (subtotal * GST_RATE_PERCENT + 50) / 100
}

/// The full bill for an order. The discount can never push the total below
/// zero.
pub fn order_totals(subtotal: Rupees, delivery_fee: Rupees, discount: Rupees) -> OrderTotals {
    let taxes = gst(subtotal);
    let total = (subtotal + delivery_fee + taxes - discount).max(0);
    OrderTotals {
        subtotal,
        delivery_fee,
        taxes,
        discount,
        total,
    }
}

/// The offer worth the most against `subtotal`. Offers whose minimum is not
/// met never win; ties go to the earlier listing.
pub fn best_offer<'a>(offers: &'a [Offer], subtotal: Rupees) -> Option<&'a Offer> {
    let mut best: Option<(&Offer, Rupees)> = None;
    for offer in offers {
        let value = offer.discount_on(subtotal);
        if value <= 0 {
            continue;
        }
        // Strict comparison keeps the earlier offer on ties.
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((offer, value));
        }
    }
    best.map(|(offer, _)| offer)
}

/// Resolves a promo code typed at checkout against a restaurant's offers.
/// `None` when the code is unknown or the subtotal has not reached the
/// offer's minimum. Matching ignores case and surrounding whitespace.
pub fn promo_discount(offers: &[Offer], code: &str, subtotal: Rupees) -> Option<Rupees> {
    let entered = code.trim();
    if entered.is_empty() {
        return None;
    }
    let offer = offers.iter().find(|offer| {
        offer
            .code
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(entered))
    })?;
    let value = offer.discount_on(subtotal);
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomizationOption, Discount, MenuItem};

    fn dish(id: &str, price: Rupees) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            name: id.to_string(),
            description: String::new(),
            price,
            image: String::new(),
            category: "Mains".to_string(),
            is_veg: true,
            is_vegan: false,
            spice_level: None,
            is_available: true,
            customizations: vec![],
        }
    }

    fn offer(id: &str, discount: Discount, min_order_value: Rupees, code: Option<&str>) -> Offer {
        Offer {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            discount,
            min_order_value,
            code: code.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_subtotal_sums_quantities_and_options() {
        let naan = CustomizationOption {
            id: "o1".to_string(),
            name: "Extra Naan".to_string(),
            extra_price: 40,
        };
        let items = vec![
            CartItem::new(dish("m1", 299), 2, vec![]),
            CartItem::new(dish("m2", 149), 1, vec![naan]),
        ];
        assert_eq!(cart_subtotal(&items), 787);
        assert_eq!(cart_subtotal(&[]), 0);
    }

    #[test]
    fn test_gst_rounds_half_up() {
        assert_eq!(gst(100), 5);
        assert_eq!(gst(110), 6); // 5.5 rounds up
        assert_eq!(gst(109), 5); // 5.45 rounds down
        assert_eq!(gst(747), 37);
        assert_eq!(gst(0), 0);
    }

    #[test]
    fn test_order_totals_checkout_example() {
        // 2 x 299 + 1 x 149 with a 20% promo and a 30 rupee delivery fee
        let totals = order_totals(747, 30, 149);
        assert_eq!(
            totals,
            OrderTotals {
                subtotal: 747,
                delivery_fee: 30,
                taxes: 37,
                discount: 149,
                total: 665,
            }
        );
    }

    #[test]
    fn test_total_never_goes_negative() {
        let totals = order_totals(100, 0, 500);
        assert_eq!(totals.total, 0);
        assert_eq!(totals.discount, 500);
    }

    #[test]
    fn test_best_offer_picks_largest_discount() {
        let offers = vec![
            offer("small", Discount::Flat(50), 0, None),
            offer("big", Discount::Percent(20), 199, None),
        ];
        // 20% of 747 is 149, beating the flat 50
        assert_eq!(best_offer(&offers, 747).map(|o| o.title.as_str()), Some("big"));
        // Below 199 only the flat offer qualifies
        assert_eq!(best_offer(&offers, 150).map(|o| o.title.as_str()), Some("small"));
    }

    #[test]
    fn test_best_offer_tie_goes_to_first_listing() {
        let offers = vec![
            offer("first", Discount::Flat(50), 0, None),
            offer("second", Discount::Flat(50), 0, None),
        ];
        assert_eq!(best_offer(&offers, 300).map(|o| o.title.as_str()), Some("first"));
    }

    #[test]
    fn test_best_offer_none_when_nothing_qualifies() {
        let offers = vec![offer("strict", Discount::Flat(100), 500, None)];
        assert_eq!(best_offer(&offers, 499), None);
        assert_eq!(best_offer(&[], 499), None);
    }

    #[test]
    fn test_promo_matches_code_case_insensitively() {
        let offers = vec![offer("spice", Discount::Percent(20), 199, Some("SPICE20"))];
        assert_eq!(promo_discount(&offers, "spice20", 747), Some(149));
        assert_eq!(promo_discount(&offers, "  SPICE20  ", 747), Some(149));
    }

    #[test]
    fn test_promo_rejects_unknown_and_underfunded_codes() {
        let offers = vec![offer("spice", Discount::Percent(20), 199, Some("SPICE20"))];
        assert_eq!(promo_discount(&offers, "WELCOME50", 747), None);
        assert_eq!(promo_discount(&offers, "SPICE20", 198), None);
        assert_eq!(promo_discount(&offers, "", 747), None);
    }

    #[test]
    fn test_promo_ignores_offers_without_codes() {
        let offers = vec![offer("auto", Discount::Flat(30), 0, None)];
        assert_eq!(promo_discount(&offers, "auto", 500), None);
    }
}
