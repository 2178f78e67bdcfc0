//! Whether a shipment needs a customs declaration.

use crate::address::ShippingAddress;
use crate::config::ShippingConfig;

/// State codes of US overseas military post offices.
pub const MILITARY_STATE_CODES: [&str; 3] = ["AA", "AE", "AP"];

/// Decides whether the customs step is part of the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomsEligibility {
    military_state_codes: Vec<String>,
}

impl Default for CustomsEligibility {
    fn default() -> Self {
        Self {
            military_state_codes: MILITARY_STATE_CODES.iter().map(|code| code.to_string()).collect(),
        }
    }
}

impl CustomsEligibility {
    pub fn new(military_state_codes: Vec<String>) -> Self {
        Self { military_state_codes }
    }

    pub fn from_config(config: &ShippingConfig) -> Self {
        Self::new(config.military_state_codes.clone())
    }

    /// Military post offices read as "US" but still ship through customs.
    pub fn is_military(&self, address: &ShippingAddress) -> bool {
        self.military_state_codes
            .iter()
            .any(|code| code.eq_ignore_ascii_case(address.state.trim()))
    }

    /// Customs is required for a military address on either side, or when
    /// the countries differ.
    ///
    /// Country codes are compared ignoring case and surrounding whitespace.
    /// A 2-letter code and its 3-letter form ("US", "USA") count as different
    /// countries.
    pub fn required(&self, origin: &ShippingAddress, destination: &ShippingAddress) -> bool {
        if self.is_military(origin) || self.is_military(destination) {
            return true;
        }
        !origin
            .country
            .trim()
            .eq_ignore_ascii_case(destination.country.trim())
    }

    /// Same rule while one of the addresses is still unknown. Without both
    /// countries only the military check can apply.
    pub fn required_for(&self, origin: Option<&ShippingAddress>, destination: Option<&ShippingAddress>) -> bool {
        match (origin, destination) {
            (Some(origin), Some(destination)) => self.required(origin, destination),
            (Some(address), None) | (None, Some(address)) => self.is_military(address),
            (None, None) => false,
        }
    }
}

/// [`CustomsEligibility::required`] with the default military codes.
pub fn customs_required(origin: &ShippingAddress, destination: &ShippingAddress) -> bool {
    CustomsEligibility::default().required(origin, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(country: &str, state: &str) -> ShippingAddress {
        ShippingAddress::default().with_country(country).with_state(state)
    }

    #[test]
    fn test_domestic_shipment() {
        assert!(!customs_required(&address("US", "NY"), &address("US", "CA")));
    }

    #[test]
    fn test_international_shipment() {
        assert!(customs_required(&address("US", "NY"), &address("VN", "")));
    }

    #[test]
    fn test_country_codes_ignore_case_and_whitespace() {
        assert!(!customs_required(&address("us", "NY"), &address("US", "CA")));
        assert!(!customs_required(&address(" US ", "NY"), &address("US", "CA")));
        assert!(customs_required(&address("USA", "NY"), &address("US", "CA")));
    }

    #[test]
    fn test_military_addresses() {
        assert!(customs_required(&address("US", "AA"), &address("US", "NY")));
        assert!(customs_required(&address("US", "NY"), &address("US", "AE")));
        assert!(customs_required(&address("US", "AP"), &address("US", "AP")));
        assert!(customs_required(&address("US", "ap"), &address("US", "NY")));
    }

    #[test]
    fn test_custom_military_codes() {
        let eligibility = CustomsEligibility::new(vec!["ZZ".to_string()]);
        assert!(!eligibility.required(&address("US", "AA"), &address("US", "NY")));
        assert!(eligibility.required(&address("US", "ZZ"), &address("US", "NY")));
    }

    #[test]
    fn test_partial_addresses() {
        let eligibility = CustomsEligibility::default();
        assert!(!eligibility.required_for(Some(&address("US", "NY")), None));
        assert!(eligibility.required_for(None, Some(&address("US", "AE"))));
        assert!(!eligibility.required_for(None, None));
    }

    #[test]
    fn test_from_config() {
        let eligibility = CustomsEligibility::from_config(&ShippingConfig::default());
        assert_eq!(eligibility, CustomsEligibility::default());
    }
}
