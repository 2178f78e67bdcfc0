//! Shipping label configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShippingError;
use crate::money::Currency;

/// When the carrier-and-rates step needs a phone on both addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneRequirement {
    /// Always require both phones before rates can be fetched.
    #[default]
    Always,
    /// Only require phones when the shipment needs a customs declaration.
    CustomsOnly,
}

/// Configuration for a shipping label session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Countries the label carrier can ship from.
    #[serde(default = "default_carrier_supported_countries")]
    pub carrier_supported_countries: Vec<String>,

    /// State codes for overseas military post offices.
    #[serde(default = "default_military_state_codes")]
    pub military_state_codes: Vec<String>,

    /// Phone requirement for rate selection.
    #[serde(default)]
    pub phone_requirement: PhoneRequirement,

    /// Store weight unit used in row bodies.
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,

    /// Store currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            carrier_supported_countries: default_carrier_supported_countries(),
            military_state_codes: default_military_state_codes(),
            phone_requirement: PhoneRequirement::default(),
            weight_unit: default_weight_unit(),
            currency: Currency::default(),
        }
    }
}

impl ShippingConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShippingError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ShippingError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether the carrier can ship from `country_code`.
    pub fn is_carrier_supported(&self, country_code: &str) -> bool {
        self.carrier_supported_countries
            .iter()
            .any(|code| code.eq_ignore_ascii_case(country_code))
    }
}

fn default_carrier_supported_countries() -> Vec<String> {
    // USPS origins: the US and its territories.
    ["US", "PR", "VI", "GU", "AS", "UM", "MP", "FM", "MH"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_military_state_codes() -> Vec<String> {
    ["AA", "AE", "AP"].into_iter().map(String::from).collect()
}

fn default_weight_unit() -> String {
    "lbs".to_string()
}
