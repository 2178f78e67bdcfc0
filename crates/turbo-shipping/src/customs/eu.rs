//! EU customs scenario.
//!
//! Shipments from the US into the EU (plus Norway and Switzerland) need a
//! more descriptive item description on the customs form.

const ORIGIN_COUNTRY_CODES: &[&str] = &["US", "USA"];

const DESTINATION_COUNTRY_CODES: &[&str] = &[
    "AT", "AUT", "BE", "BEL", "BG", "BGR", "HR", "HRV", "CY", "CYP", "CZ", "CZE", "DK", "DNK", "EE", "EST",
    "FI", "FIN", "FR", "FRA", "DE", "DEU", "GR", "GRC", "HU", "HUN", "IE", "IRL", "IT", "ITA", "LV", "LVA",
    "LT", "LTU", "LU", "LUX", "MT", "MLT", "NL", "NLD", "NO", "NOR", "PL", "POL", "PT", "PRT", "RO", "ROU",
    "SK", "SVK", "SI", "SVN", "ES", "ESP", "SE", "SWE",
];

const SWISS_COUNTRY_CODES: &[&str] = &["CH", "CHE"];

/// Whether a shipment from `origin_country` to `destination_country` falls
/// under the EU customs rules. Accepts 2- and 3-letter country codes.
pub fn is_eu_customs_scenario(origin_country: &str, destination_country: &str) -> bool {
    let origin = origin_country.trim().to_ascii_uppercase();
    let destination = destination_country.trim().to_ascii_uppercase();

    ORIGIN_COUNTRY_CODES.contains(&origin.as_str())
        && (DESTINATION_COUNTRY_CODES.contains(&destination.as_str())
            || SWISS_COUNTRY_CODES.contains(&destination.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eu_destinations() {
        for code in ["AT", "AUT", "DE", "DEU", "FR", "FRA", "SE", "SWE", "NO", "NOR", "CH", "CHE"] {
            assert!(is_eu_customs_scenario("US", code), "{code} should be an EU destination");
            assert!(is_eu_customs_scenario("USA", code));
        }
    }

    #[test]
    fn test_non_eu_destination() {
        assert!(!is_eu_customs_scenario("US", "BR"));
        assert!(!is_eu_customs_scenario("US", "US"));
    }

    #[test]
    fn test_non_us_origin() {
        assert!(!is_eu_customs_scenario("BR", "DE"));
        assert!(!is_eu_customs_scenario("", "DE"));
    }
}
