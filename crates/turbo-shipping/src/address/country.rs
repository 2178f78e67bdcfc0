//! Country and state reference data.

use serde::{Deserialize, Serialize};

/// A state, province or region of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryState {
    pub code: String,
    pub name: String,
}

impl CountryState {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A country with its states, as supplied by the store's location data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub states: Vec<CountryState>,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>, states: Vec<CountryState>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            states,
        }
    }

    /// Whether an address in this country must pick a state.
    pub fn requires_state(&self) -> bool {
        !self.states.is_empty()
    }

    /// States sorted by display name.
    pub fn sorted_states(&self) -> Vec<&CountryState> {
        let mut states: Vec<&CountryState> = self.states.iter().collect();
        states.sort_by(|a, b| a.name.cmp(&b.name));
        states
    }

    pub fn state_name(&self, code: &str) -> Option<&str> {
        self.states
            .iter()
            .find(|state| state.code == code)
            .map(|state| state.name.as_str())
    }
}

/// Find a country by code.
pub fn find_country<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    countries.iter().find(|country| country.code == code)
}

/// Countries an origin address may use: only those the carrier ships from.
pub fn origin_country_choices(countries: &[Country], supported_codes: &[String]) -> Vec<Country> {
    countries
        .iter()
        .filter(|country| {
            supported_codes
                .iter()
                .any(|code| code.eq_ignore_ascii_case(&country.code))
        })
        .cloned()
        .collect()
}

/// Countries a destination address may use: all of them.
pub fn destination_country_choices(countries: &[Country]) -> Vec<Country> {
    countries.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_countries() -> Vec<Country> {
        vec![
            Country::new(
                "US",
                "United States",
                vec![
                    CountryState::new("NY", "New York"),
                    CountryState::new("CA", "California"),
                ],
            ),
            Country::new("PR", "Puerto Rico", vec![]),
            Country::new("VN", "Vietnam", vec![]),
        ]
    }

    #[test]
    fn test_origin_choices_are_filtered() {
        let supported = vec!["US".to_string(), "PR".to_string()];
        let choices = origin_country_choices(&sample_countries(), &supported);
        let codes: Vec<&str> = choices.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["US", "PR"]);
    }

    #[test]
    fn test_destination_choices_are_unfiltered() {
        assert_eq!(destination_country_choices(&sample_countries()).len(), 3);
    }

    #[test]
    fn test_states() {
        let countries = sample_countries();
        let us = find_country(&countries, "US").unwrap();
        assert!(us.requires_state());
        assert_eq!(us.state_name("NY"), Some("New York"));
        assert_eq!(us.sorted_states()[0].code, "CA");

        let vn = find_country(&countries, "VN").unwrap();
        assert!(!vn.requires_state());
        assert!(find_country(&countries, "ZZ").is_none());
    }
}
