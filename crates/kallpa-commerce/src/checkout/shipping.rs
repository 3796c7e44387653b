//! Shipping details collected in the first checkout step.

use serde::{Deserialize, Serialize};

/// Where and to whom the order ships.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    /// State or region.
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingInfo {
    pub const DEFAULT_COUNTRY: &'static str = "Perú";

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Names of fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip code", &self.zip_code),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Every field is filled. Formats are not checked.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: Self::DEFAULT_COUNTRY.to_string(),
        }
    }
}
