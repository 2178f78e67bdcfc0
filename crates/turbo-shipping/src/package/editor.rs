//! Editing state for a single package.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ShippingError;
use crate::ids::PackageId;
use super::attributes::{PackageAttributes, PackageItem};
use super::catalog::PackageCatalog;
use super::item::OrderLineItem;
use super::weight::{default_weight_for, format_weight, parse_total_weight, TotalWeight};

/// Package selection and total weight for one package of the order.
///
/// The total weight follows the calculator until the merchant types a value.
/// From then on it is an override and survives package changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageEditor {
    line_items: Vec<OrderLineItem>,
    selected_package: Option<PackageId>,
    box_weight: Option<Decimal>,
    total_weight: TotalWeight,
}

impl PackageEditor {
    /// Start editing. `initial` is the package previously submitted for this
    /// order, if any.
    ///
    /// An initial weight equal to the computed default keeps following the
    /// calculator; any other value is treated as an override.
    pub fn new(line_items: Vec<OrderLineItem>, catalog: &PackageCatalog, initial: Option<&PackageAttributes>) -> Self {
        let selected_package = initial
            .map(|attributes| attributes.package_id.clone())
            .filter(|id| !id.is_empty());
        let box_weight = selected_package
            .as_ref()
            .and_then(|id| catalog.find(id))
            .and_then(|package| package.box_weight());
        let computed = default_weight_for(&line_items, box_weight);

        let total_weight = match initial {
            Some(attributes) if attributes.total_weight.trim() != format_weight(computed) => {
                TotalWeight::Override(attributes.total_weight.clone())
            }
            _ => TotalWeight::Default(computed),
        };

        Self {
            line_items,
            selected_package,
            box_weight,
            total_weight,
        }
    }

    pub fn selected_package(&self) -> Option<&PackageId> {
        self.selected_package.as_ref()
    }

    /// Pick a package. The total weight is recomputed unless it was overridden.
    pub fn select_package(&mut self, catalog: &PackageCatalog, package_id: PackageId) {
        self.box_weight = catalog.find(&package_id).and_then(|package| package.box_weight());
        self.selected_package = Some(package_id);

        if let TotalWeight::Default(_) = self.total_weight {
            self.total_weight = TotalWeight::Default(self.default_weight());
        }
        debug!(
            package = ?self.selected_package,
            total_weight = %self.total_weight.display(),
            overridden = self.total_weight.is_override(),
            "package selected"
        );
    }

    /// Record a weight typed by the merchant.
    pub fn edit_total_weight(&mut self, value: impl Into<String>) {
        self.total_weight = TotalWeight::Override(value.into());
    }

    /// Drop an override and follow the calculator again.
    pub fn reset_total_weight(&mut self) {
        self.total_weight = TotalWeight::Default(self.default_weight());
    }

    /// What the calculator currently produces.
    pub fn default_weight(&self) -> Decimal {
        default_weight_for(&self.line_items, self.box_weight)
    }

    pub fn total_weight(&self) -> &TotalWeight {
        &self.total_weight
    }

    /// Weight string shown in the form.
    pub fn displayed_weight(&self) -> String {
        self.total_weight.display()
    }

    pub fn is_valid(&self) -> bool {
        self.selected_package.is_some() && self.total_weight.is_valid()
    }

    /// Attributes to hand to the workflow.
    pub fn validated_attributes(&self) -> Result<PackageAttributes, ShippingError> {
        let package_id = self
            .selected_package
            .clone()
            .ok_or(ShippingError::NoPackageSelected)?;
        let total_weight = self.displayed_weight();
        parse_total_weight(&total_weight)?;

        let items = self
            .line_items
            .iter()
            .filter(|item| item.is_shippable())
            .map(PackageItem::from)
            .collect();

        Ok(PackageAttributes {
            package_id,
            total_weight,
            items,
        })
    }
}
