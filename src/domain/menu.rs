use super::Rupees;
use crate::error::SelectionError;

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    /// Owning restaurant. Nothing enforces the reference; lookups that miss
    /// simply come back empty.
    pub restaurant_id: String,
    pub name: String,
    #[allow(dead_code)]
    pub description: String,
    pub price: Rupees,
    #[allow(dead_code)]
    pub image: String,
    pub category: String,
    pub is_veg: bool,
    pub is_vegan: bool,
    pub spice_level: Option<SpiceLevel>,
    pub is_available: bool,
    pub customizations: Vec<CustomizationGroup>,
}

/// Heat rating, mildest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
    ExtraHot,
}

/// A named group of add-on choices for a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationGroup {
    #[allow(dead_code)]
    pub id: String,
    pub name: String,
    pub options: Vec<CustomizationOption>,
    /// At least one option from this group must be chosen.
    pub required: bool,
    /// Upper bound on choices from this group, unlimited when `None`.
    pub max_selection: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationOption {
    pub id: String,
    pub name: String,
    pub extra_price: Rupees,
}

impl MenuItem {
    /// Checks a set of chosen options against this item's customization
    /// groups: every chosen option must belong to one of the groups, required
    /// groups need at least one choice, and per-group counts must stay within
    /// `max_selection`.
    pub fn validate_selection(&self, chosen: &[CustomizationOption]) -> Result<(), SelectionError> {
        for option in chosen {
            let known = self
                .customizations
                .iter()
                .any(|group| group.options.iter().any(|o| o.id == option.id));
            if !known {
                return Err(SelectionError::UnknownOption(option.id.clone()));
            }
        }

        for group in &self.customizations {
            let picked = chosen
                .iter()
                .filter(|option| group.options.iter().any(|o| o.id == option.id))
                .count() as u32;
            if group.required && picked == 0 {
                return Err(SelectionError::RequiredGroupMissing(group.name.clone()));
            }
            if let Some(max) = group.max_selection {
                if picked > max {
                    return Err(SelectionError::TooManySelections {
                        group: group.name.clone(),
                        max,
                        picked,
                    });
                }
            }
        }

        Ok(())
    }
}
