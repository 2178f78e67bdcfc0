//! Default package weight and total-weight parsing.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ShippingError;
use super::item::OrderLineItem;

/// Default weight of a package: every shippable item's quantity times its
/// unit weight, plus the empty box.
///
/// `weight_of` looks up the unit weight of an item; a missing weight counts
/// as zero. Virtual items are skipped.
pub fn compute_default_weight<F>(items: &[OrderLineItem], weight_of: F, box_weight: Option<Decimal>) -> Decimal
where
    F: Fn(&OrderLineItem) -> Option<Decimal>,
{
    let items_weight = items
        .iter()
        .filter(|item| item.is_shippable())
        .map(|item| item.quantity.saturating_mul(weight_of(item).unwrap_or(Decimal::ZERO)))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    items_weight.saturating_add(box_weight.unwrap_or(Decimal::ZERO))
}

/// [`compute_default_weight`] using the weight carried on each line item.
pub fn default_weight_for(items: &[OrderLineItem], box_weight: Option<Decimal>) -> Decimal {
    compute_default_weight(items, |item| item.weight, box_weight)
}

/// Format a weight with at least one fractional digit: `3` becomes "3.0",
/// `2.50` becomes "2.5".
pub fn format_weight(weight: Decimal) -> String {
    let weight = weight.normalize();
    if weight.scale() == 0 {
        format!("{}.0", weight)
    } else {
        weight.to_string()
    }
}

/// Parse a user-entered decimal such as "1.5". Surrounding whitespace is ignored.
pub fn parse_decimal(input: &str) -> Result<Decimal, ShippingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ShippingError::InvalidDecimal(input.to_string()));
    }
    Decimal::from_str(trimmed).map_err(|_| ShippingError::InvalidDecimal(input.to_string()))
}

/// Parse a total weight, which must be strictly positive.
pub fn parse_total_weight(input: &str) -> Result<Decimal, ShippingError> {
    match parse_decimal(input) {
        Ok(weight) if weight > Decimal::ZERO => Ok(weight),
        _ => Err(ShippingError::InvalidWeight(input.to_string())),
    }
}

pub fn is_valid_total_weight(input: &str) -> bool {
    parse_total_weight(input).is_ok()
}

/// The total weight shown for a package.
///
/// `Default` follows the calculator and is recomputed when the package
/// changes. `Override` is what the merchant typed and is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TotalWeight {
    Default(Decimal),
    Override(String),
}

impl TotalWeight {
    pub fn display(&self) -> String {
        match self {
            TotalWeight::Default(weight) => format_weight(*weight),
            TotalWeight::Override(value) => value.clone(),
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, TotalWeight::Override(_))
    }

    pub fn is_valid(&self) -> bool {
        match self {
            TotalWeight::Default(weight) => *weight > Decimal::ZERO,
            TotalWeight::Override(value) => is_valid_total_weight(value),
        }
    }
}

impl Default for TotalWeight {
    fn default() -> Self {
        TotalWeight::Default(Decimal::ZERO)
    }
}
