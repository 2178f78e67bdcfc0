//! Order line items as seen by the label workflow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// A line of the order being shipped. Read-only input to the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Product or variation id.
    pub product_id: ProductId,
    pub name: String,
    pub quantity: Decimal,
    /// Virtual items (downloads, services) are never shipped.
    #[serde(default)]
    pub is_virtual: bool,
    /// Weight of one unit in the store weight unit, if the product has one.
    #[serde(default)]
    pub weight: Option<Decimal>,
    /// Price of one unit.
    #[serde(default)]
    pub value: Decimal,
}

impl OrderLineItem {
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            quantity,
            is_virtual: false,
            weight: None,
            value: Decimal::ZERO,
        }
    }

    pub fn with_weight(self, weight: Decimal) -> Self {
        Self {
            weight: Some(weight),
            ..self
        }
    }

    pub fn with_value(self, value: Decimal) -> Self {
        Self { value, ..self }
    }

    pub fn virtual_item(self) -> Self {
        Self {
            is_virtual: true,
            ..self
        }
    }

    /// Whether this line goes into a box.
    pub fn is_shippable(&self) -> bool {
        !self.is_virtual
    }
}
