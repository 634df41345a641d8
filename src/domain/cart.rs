use super::{CustomizationOption, MenuItem, Rupees};

/// One line in the cart: a menu-item snapshot plus quantity and add-ons.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub selected_options: Vec<CustomizationOption>,
}

impl CartItem {
    pub fn new(
        menu_item: MenuItem,
        quantity: u32,
        selected_options: Vec<CustomizationOption>,
    ) -> Self {
        Self {
            menu_item,
            quantity,
            selected_options,
        }
    }

    /// Price of a single unit including selected add-ons.
    pub fn unit_price(&self) -> Rupees {
        let extras: Rupees = self.selected_options.iter().map(|o| o.extra_price).sum();
        self.menu_item.price + extras
    }

    /// Price of the whole line.
    pub fn line_total(&self) -> Rupees {
        self.unit_price() * Rupees::from(self.quantity)
    }

    /// Whether an add request targets this exact line: same dish, same
    /// add-on selection.
    pub(crate) fn matches(&self, item_id: &str, selected_options: &[CustomizationOption]) -> bool {
        self.menu_item.id == item_id && self.selected_options == selected_options
    }
}

/// The session cart. Holds items from at most one restaurant at a time,
/// mirroring the single-restaurant shape of an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub restaurant_id: Option<String>,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, price: Rupees) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r-test".to_string(),
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

    #[test]
    fn test_line_total_includes_options_per_unit() {
        let naan = CustomizationOption {
            id: "o1".to_string(),
            name: "Extra Naan".to_string(),
            extra_price: 40,
        };
        let line = CartItem::new(dish("m1", 299), 2, vec![naan]);
        assert_eq!(line.unit_price(), 339);
        assert_eq!(line.line_total(), 678);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let cart = Cart {
            restaurant_id: Some("r-test".to_string()),
            items: vec![
                CartItem::new(dish("m1", 299), 2, vec![]),
                CartItem::new(dish("m2", 149), 3, vec![]),
            ],
        };
        assert_eq!(cart.item_count(), 5);
        assert!(!cart.is_empty());
        assert!(Cart::default().is_empty());
    }
}
