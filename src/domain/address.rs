use std::fmt;

/// A saved delivery address. Display only; nothing validates pincodes or
/// phone numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    #[allow(dead_code)]
    pub id: String,
    /// Short tag shown on the address card, e.g. "Home".
    pub label: String,
    pub street: String,
    pub landmark: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone_number: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.street)?;
        if let Some(landmark) = &self.landmark {
            write!(f, ", {}", landmark)?;
        }
        write!(f, ", {}, {} - {}", self.city, self.state, self.pincode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_landmark_when_present() {
        let mut address = Address {
            id: "addr-1".to_string(),
            label: "Home".to_string(),
            street: "23, Link Road, Andheri West".to_string(),
            landmark: None,
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400053".to_string(),
            phone_number: "+91 98765 43210".to_string(),
        };
        assert_eq!(
            address.to_string(),
            "23, Link Road, Andheri West, Mumbai, Maharashtra - 400053"
        );

        address.landmark = Some("Near Metro Station".to_string());
        assert_eq!(
            address.to_string(),
            "23, Link Road, Andheri West, Near Metro Station, Mumbai, Maharashtra - 400053"
        );
    }
}
