//! Package module.
//!
//! Order line items, the package catalog, package attributes, and the
//! default-weight calculator with total-weight override tracking.

mod attributes;
pub(crate) mod catalog;
mod editor;
mod item;
mod weight;

pub use attributes::{PackageAttributes, PackageItem};
pub use catalog::{CatalogPackage, CustomPackage, PackageCatalog, PredefinedOption, PredefinedPackage};
pub use editor::PackageEditor;
pub use item::OrderLineItem;
pub use weight::{
    compute_default_weight, default_weight_for, format_weight, is_valid_total_weight, parse_decimal,
    parse_total_weight, TotalWeight,
};
