//! Customs form and item validation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::package::parse_decimal;
use super::form::{ContentsType, CustomsForm, CustomsItem, RestrictionType};

/// AES/ITN as issued by the US export system, or a NOEEI exemption code.
static ITN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:AES X\d{14})|(?:NOEEI 30\.\d{1,2}(?:\([a-z]\)(?:\(\d\))?)?))$")
        .expect("Valid ITN pattern")
});

/// Destinations that always need an ITN.
pub const ITN_REQUIRED_DESTINATIONS: [&str; 5] = ["IR", "SY", "KP", "CU", "SD"];

/// Items sharing a tariff number above this total value need an ITN.
pub const ITN_VALUE_THRESHOLD: Decimal = Decimal::from_parts(2500, 0, 0, false, 0);

const EU_MINIMUM_DESCRIPTION_LENGTH: usize = 3;

/// A problem with one declared item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomsItemIssue {
    MissingDescription,
    /// Shipments into the EU need a more descriptive description.
    DescriptionTooShort,
    InvalidValue,
    InvalidWeight,
    MissingOriginCountry,
    InvalidTariffNumber,
}

/// A problem with a customs form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomsFormIssue {
    MissingContentExplanation,
    MissingRestrictionComments,
    /// The destination always needs an ITN.
    MissingItnForDestination,
    /// Items under these tariff numbers are worth more than the threshold.
    MissingItnForHighValueClasses(Vec<String>),
    InvalidItn,
    InvalidItem {
        product_id: ProductId,
        issue: CustomsItemIssue,
    },
}

pub fn is_valid_itn(itn: &str) -> bool {
    ITN_REGEX.is_match(itn)
}

/// An HS tariff number is optional. When present it is 6 to 12 digits.
pub fn is_valid_hs_tariff_number(number: &str) -> bool {
    number.is_empty() || ((6..=12).contains(&number.len()) && number.chars().all(|c| c.is_ascii_digit()))
}

fn check_description(description: &str, eu_scenario: bool, issues: &mut Vec<CustomsItemIssue>) {
    let description = description.trim();
    if description.is_empty() {
        issues.push(CustomsItemIssue::MissingDescription);
    } else if eu_scenario && description.chars().count() < EU_MINIMUM_DESCRIPTION_LENGTH {
        issues.push(CustomsItemIssue::DescriptionTooShort);
    }
}

fn check_origin_and_tariff(origin_country: &str, hs_tariff_number: &str, issues: &mut Vec<CustomsItemIssue>) {
    if origin_country.trim().is_empty() {
        issues.push(CustomsItemIssue::MissingOriginCountry);
    }
    if !is_valid_hs_tariff_number(hs_tariff_number) {
        issues.push(CustomsItemIssue::InvalidTariffNumber);
    }
}

/// Check a declared item. `eu_scenario` comes from [`super::is_eu_customs_scenario`].
pub fn validate_customs_item(item: &CustomsItem, eu_scenario: bool) -> Vec<CustomsItemIssue> {
    let mut issues = Vec::new();
    check_description(&item.description, eu_scenario, &mut issues);
    if item.value <= Decimal::ZERO {
        issues.push(CustomsItemIssue::InvalidValue);
    }
    if item.weight <= Decimal::ZERO {
        issues.push(CustomsItemIssue::InvalidWeight);
    }
    check_origin_and_tariff(&item.origin_country, &item.hs_tariff_number, &mut issues);
    issues
}

/// An item as typed into the item details form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomsItemDraft {
    pub product_id: ProductId,
    pub quantity: Decimal,
    pub description: String,
    pub value: String,
    pub weight: String,
    pub origin_country: String,
    pub hs_tariff_number: String,
}

impl CustomsItemDraft {
    pub fn from_item(item: &CustomsItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            description: item.description.clone(),
            value: item.value.to_string(),
            weight: item.weight.to_string(),
            origin_country: item.origin_country.clone(),
            hs_tariff_number: item.hs_tariff_number.clone(),
        }
    }

    /// Parse and check the typed values.
    pub fn validate(&self, eu_scenario: bool) -> Result<CustomsItem, Vec<CustomsItemIssue>> {
        let mut issues = Vec::new();
        check_description(&self.description, eu_scenario, &mut issues);

        let value = parse_decimal(&self.value).ok().filter(|value| *value > Decimal::ZERO);
        if value.is_none() {
            issues.push(CustomsItemIssue::InvalidValue);
        }
        let weight = parse_decimal(&self.weight).ok().filter(|weight| *weight > Decimal::ZERO);
        if weight.is_none() {
            issues.push(CustomsItemIssue::InvalidWeight);
        }
        check_origin_and_tariff(&self.origin_country, &self.hs_tariff_number, &mut issues);

        match (value, weight) {
            (Some(value), Some(weight)) if issues.is_empty() => Ok(CustomsItem {
                product_id: self.product_id.clone(),
                description: self.description.trim().to_string(),
                quantity: self.quantity,
                value,
                weight,
                origin_country: self.origin_country.clone(),
                hs_tariff_number: self.hs_tariff_number.clone(),
            }),
            _ => Err(issues),
        }
    }
}

/// Tariff numbers whose items add up to more than [`ITN_VALUE_THRESHOLD`],
/// sorted.
pub fn high_value_tariff_classes(items: &[CustomsItem]) -> Vec<String> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for item in items {
        if item.hs_tariff_number.is_empty() || !is_valid_hs_tariff_number(&item.hs_tariff_number) {
            continue;
        }
        let total = totals.entry(item.hs_tariff_number.as_str()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(item.total_value());
    }

    let mut classes: Vec<String> = totals
        .into_iter()
        .filter(|(_, total)| *total > ITN_VALUE_THRESHOLD)
        .map(|(number, _)| number.to_string())
        .collect();
    classes.sort();
    classes
}

/// Check a whole customs form, items included.
pub fn validate_customs_form(form: &CustomsForm, destination_country: &str, eu_scenario: bool) -> Vec<CustomsFormIssue> {
    let mut issues = Vec::new();
    let itn = form.itn.trim();

    if form.contents_type == ContentsType::Other && form.content_explanation.trim().is_empty() {
        issues.push(CustomsFormIssue::MissingContentExplanation);
    }
    if form.restriction_type == RestrictionType::Other && form.restriction_comments.trim().is_empty() {
        issues.push(CustomsFormIssue::MissingRestrictionComments);
    }
    if itn.is_empty() {
        if ITN_REQUIRED_DESTINATIONS.contains(&destination_country.trim()) {
            issues.push(CustomsFormIssue::MissingItnForDestination);
        }
        let classes = high_value_tariff_classes(&form.items);
        if !classes.is_empty() {
            issues.push(CustomsFormIssue::MissingItnForHighValueClasses(classes));
        }
    } else if !is_valid_itn(itn) {
        issues.push(CustomsFormIssue::InvalidItn);
    }

    for item in &form.items {
        for issue in validate_customs_item(item, eu_scenario) {
            issues.push(CustomsFormIssue::InvalidItem {
                product_id: item.product_id.clone(),
                issue,
            });
        }
    }

    issues
}

/// Whether every form is ready to submit.
pub fn customs_forms_valid(forms: &[CustomsForm], destination_country: &str, eu_scenario: bool) -> bool {
    !forms.is_empty()
        && forms
            .iter()
            .all(|form| validate_customs_form(form, destination_country, eu_scenario).is_empty())
}
