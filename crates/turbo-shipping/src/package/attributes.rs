//! Package attributes submitted from the package details step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{PackageId, ProductId};
use super::item::OrderLineItem;
use super::weight::is_valid_total_weight;

/// An order item placed in a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: Decimal,
    /// Unit weight, zero when the product has none.
    pub weight: Decimal,
    /// Unit value.
    pub value: Decimal,
}

impl From<&OrderLineItem> for PackageItem {
    fn from(item: &OrderLineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            weight: item.weight.unwrap_or(Decimal::ZERO),
            value: item.value,
        }
    }
}

/// One package of the shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageAttributes {
    pub package_id: PackageId,
    /// Total weight as typed or computed, e.g. "2.5".
    pub total_weight: String,
    #[serde(default)]
    pub items: Vec<PackageItem>,
}

impl PackageAttributes {
    pub fn new(package_id: impl Into<PackageId>, total_weight: impl Into<String>, items: Vec<PackageItem>) -> Self {
        Self {
            package_id: package_id.into(),
            total_weight: total_weight.into(),
            items,
        }
    }

    /// Whether the package can be submitted: it has a package and a positive weight.
    pub fn is_valid(&self) -> bool {
        !self.package_id.is_empty() && is_valid_total_weight(&self.total_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_item_from_line_item() {
        let line = OrderLineItem::new("7", "Mug", Decimal::from(3));
        let item = PackageItem::from(&line);
        assert_eq!(item.weight, Decimal::ZERO);
        assert_eq!(item.quantity, Decimal::from(3));
    }

    #[test]
    fn test_validity() {
        assert!(PackageAttributes::new("Test Box", "1.5", vec![]).is_valid());
        assert!(!PackageAttributes::new("", "1.5", vec![]).is_valid());
        assert!(!PackageAttributes::new("Test Box", "0", vec![]).is_valid());
        assert!(!PackageAttributes::new("Test Box", "", vec![]).is_valid());
    }
}
