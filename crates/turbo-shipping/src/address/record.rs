//! Shipping party addresses.

use serde::{Deserialize, Serialize};

/// Which side of the shipment an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipType {
    Origin,
    Destination,
}

impl ShipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Origin => "origin",
            ShipType::Destination => "destination",
        }
    }
}

/// Address of one shipping party.
///
/// Treated as an immutable value: edits produce a new address through the
/// `with_*` methods and the workflow replaces its copy wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Company name.
    pub company: String,
    /// Full name of the contact.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Country code (e.g., "US").
    pub country: String,
    /// State/region code (e.g., "NY", or "AE" for military post offices).
    pub state: String,
    /// Address line 1.
    pub address1: String,
    /// Address line 2 (apt, suite, etc.).
    pub address2: String,
    /// City.
    pub city: String,
    /// Postal/ZIP code.
    pub postcode: String,
}

impl ShippingAddress {
    /// Create a new address without company, phone or second line.
    pub fn new(
        name: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postcode: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address1: address1.into(),
            city: city.into(),
            state: state.into(),
            postcode: postcode.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_company(self, company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..self
        }
    }

    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..self
        }
    }

    pub fn with_address1(self, address1: impl Into<String>) -> Self {
        Self {
            address1: address1.into(),
            ..self
        }
    }

    pub fn with_address2(self, address2: impl Into<String>) -> Self {
        Self {
            address2: address2.into(),
            ..self
        }
    }

    pub fn with_city(self, city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..self
        }
    }

    pub fn with_postcode(self, postcode: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            ..self
        }
    }

    pub fn with_state(self, state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            ..self
        }
    }

    /// Change the country. The state is cleared since it belongs to the old country.
    pub fn with_country(self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            state: String::new(),
            ..self
        }
    }

    /// Check if the address is in the United States.
    pub fn is_us(&self) -> bool {
        self.country == "US"
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address1.as_str()];
        if !self.address2.is_empty() {
            parts.push(&self.address2);
        }
        parts.push(&self.city);
        if !self.state.is_empty() {
            parts.push(&self.state);
        }
        parts.push(&self.postcode);
        parts.push(&self.country);
        parts.retain(|part| !part.is_empty());
        parts.join(", ")
    }

    /// Format as multi-line, the way a label prints it.
    pub fn multi_line(&self) -> String {
        let mut lines = Vec::new();
        if !self.name.is_empty() {
            lines.push(self.name.clone());
        }
        if !self.company.is_empty() {
            lines.push(self.company.clone());
        }
        lines.push(self.address1.clone());
        if !self.address2.is_empty() {
            lines.push(self.address2.clone());
        }
        let city_line = if self.state.is_empty() {
            format!("{} {}", self.city, self.postcode)
        } else {
            format!("{}, {} {}", self.city, self.state, self.postcode)
        };
        lines.push(city_line);
        lines.push(self.country.clone());
        lines.join("\n")
    }

    /// Convert an order's billing/shipping address into a label address.
    pub fn from_order_address(address: &OrderAddress) -> Self {
        let name = format!("{} {}", address.first_name.trim(), address.last_name.trim())
            .trim()
            .to_string();
        Self {
            company: address.company.clone().unwrap_or_default(),
            name,
            phone: address.phone.clone().unwrap_or_default(),
            country: address.country.clone(),
            state: address.state.clone(),
            address1: address.address1.clone(),
            address2: address.address2.clone().unwrap_or_default(),
            city: address.city.clone(),
            postcode: address.postcode.clone(),
        }
    }
}

/// Address as stored on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<&OrderAddress> for ShippingAddress {
    fn from(address: &OrderAddress) -> Self {
        ShippingAddress::from_order_address(address)
    }
}
