//! Customs declaration forms, one per package.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{PackageId, ProductId};
use crate::package::{PackageAttributes, PackageCatalog, PackageItem};

/// What the package contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentsType {
    #[default]
    Merchandise,
    Documents,
    Gift,
    ReturnedGoods,
    Sample,
    Other,
}

impl ContentsType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentsType::Merchandise => "Merchandise",
            ContentsType::Documents => "Documents",
            ContentsType::Gift => "Gift",
            ContentsType::ReturnedGoods => "Returned Goods",
            ContentsType::Sample => "Sample",
            ContentsType::Other => "Other",
        }
    }
}

/// Import restriction that applies to the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionType {
    #[default]
    None,
    Quarantine,
    SanitaryPhytosanitaryInspection,
    Other,
}

impl RestrictionType {
    pub fn display_name(&self) -> &'static str {
        match self {
            RestrictionType::None => "None",
            RestrictionType::Quarantine => "Quarantine",
            RestrictionType::SanitaryPhytosanitaryInspection => "Sanitary/Phytosanitary Inspection",
            RestrictionType::Other => "Other",
        }
    }
}

/// What happens to the package if it cannot be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonDeliveryOption {
    #[default]
    Return,
    Abandon,
}

/// A declared item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsItem {
    pub product_id: ProductId,
    pub description: String,
    pub quantity: Decimal,
    /// Value of one unit.
    pub value: Decimal,
    /// Weight of one unit.
    pub weight: Decimal,
    /// Country of manufacture.
    pub origin_country: String,
    /// Harmonized System tariff number. Optional.
    #[serde(default)]
    pub hs_tariff_number: String,
}

impl CustomsItem {
    /// Declaration for a packed item, before the merchant edits it.
    pub fn from_package_item(item: &PackageItem, origin_country: &str) -> Self {
        Self {
            product_id: item.product_id.clone(),
            description: item.name.clone(),
            quantity: item.quantity,
            value: item.value,
            weight: item.weight,
            origin_country: origin_country.to_string(),
            hs_tariff_number: String::new(),
        }
    }

    /// Value of all units.
    pub fn total_value(&self) -> Decimal {
        self.quantity.saturating_mul(self.value)
    }
}

/// Customs declaration for one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsForm {
    pub package_id: PackageId,
    pub package_name: String,
    #[serde(default)]
    pub contents_type: ContentsType,
    /// Required when the contents type is `Other`.
    #[serde(default)]
    pub content_explanation: String,
    #[serde(default)]
    pub restriction_type: RestrictionType,
    /// Required when the restriction type is `Other`.
    #[serde(default)]
    pub restriction_comments: String,
    #[serde(default)]
    pub non_delivery_option: NonDeliveryOption,
    /// Internal Transaction Number.
    #[serde(default)]
    pub itn: String,
    pub items: Vec<CustomsItem>,
}

impl CustomsForm {
    /// A fresh form for a package with its items declared at face value.
    pub fn for_package(package: &PackageAttributes, package_name: impl Into<String>, origin_country: &str) -> Self {
        Self {
            package_id: package.package_id.clone(),
            package_name: package_name.into(),
            contents_type: ContentsType::default(),
            content_explanation: String::new(),
            restriction_type: RestrictionType::default(),
            restriction_comments: String::new(),
            non_delivery_option: NonDeliveryOption::default(),
            itn: String::new(),
            items: package
                .items
                .iter()
                .map(|item| CustomsItem::from_package_item(item, origin_country))
                .collect(),
        }
    }

    /// Keep what the merchant entered on `previous`: the form-level fields,
    /// and the declarations of items that are still in the package.
    /// Quantities always come from the current package.
    fn merge_previous(mut self, previous: &CustomsForm) -> Self {
        self.contents_type = previous.contents_type;
        self.content_explanation = previous.content_explanation.clone();
        self.restriction_type = previous.restriction_type;
        self.restriction_comments = previous.restriction_comments.clone();
        self.non_delivery_option = previous.non_delivery_option;
        self.itn = previous.itn.clone();

        for item in &mut self.items {
            if let Some(old) = previous.items.iter().find(|old| old.product_id == item.product_id) {
                *item = CustomsItem {
                    quantity: item.quantity,
                    ..old.clone()
                };
            }
        }
        self
    }
}

/// Build one customs form per package.
///
/// Forms in `previous` for the same package keep their edits. Forms for
/// packages that are gone are dropped.
pub fn regenerate_customs_forms(
    packages: &[PackageAttributes],
    catalog: &PackageCatalog,
    origin_country: &str,
    previous: &[CustomsForm],
) -> Vec<CustomsForm> {
    packages
        .iter()
        .map(|package| {
            let name = catalog
                .title_of(&package.package_id)
                .unwrap_or_else(|| package.package_id.as_str());
            let form = CustomsForm::for_package(package, name, origin_country);
            match previous.iter().find(|old| old.package_id == package.package_id) {
                Some(old) => form.merge_previous(old),
                None => form,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::catalog::tests::sample_catalog;

    fn package_item(id: &str, name: &str, quantity: i64) -> PackageItem {
        PackageItem {
            product_id: ProductId::new(id),
            name: name.to_string(),
            quantity: Decimal::from(quantity),
            weight: Decimal::ONE,
            value: Decimal::new(1000, 2),
        }
    }

    fn package(id: &str, items: Vec<PackageItem>) -> PackageAttributes {
        PackageAttributes::new(id, "2.0", items)
    }

    #[test]
    fn test_fresh_forms() {
        let packages = vec![package("Test Box", vec![package_item("1", "Shirt", 2)])];
        let forms = regenerate_customs_forms(&packages, &sample_catalog(), "US", &[]);

        assert_eq!(forms.len(), 1);
        let form = &forms[0];
        assert_eq!(form.package_id.as_str(), "Test Box");
        assert_eq!(form.package_name, "Test Box");
        assert_eq!(form.contents_type, ContentsType::Merchandise);
        assert_eq!(form.restriction_type, RestrictionType::None);
        assert_eq!(form.non_delivery_option, NonDeliveryOption::Return);
        assert_eq!(form.items[0].description, "Shirt");
        assert_eq!(form.items[0].origin_country, "US");
        assert_eq!(form.items[0].hs_tariff_number, "");
        assert_eq!(form.items[0].total_value(), Decimal::new(2000, 2));
    }

    #[test]
    fn test_unknown_package_named_by_id() {
        let packages = vec![package("mystery", vec![])];
        let forms = regenerate_customs_forms(&packages, &PackageCatalog::default(), "US", &[]);
        assert_eq!(forms[0].package_name, "mystery");
    }

    #[test]
    fn test_regeneration_keeps_edits_for_remaining_items() {
        let catalog = sample_catalog();
        let packages = vec![package(
            "Test Box",
            vec![package_item("1", "Shirt", 2), package_item("2", "Mug", 1)],
        )];
        let mut forms = regenerate_customs_forms(&packages, &catalog, "US", &[]);
        forms[0].contents_type = ContentsType::Gift;
        forms[0].itn = "AES X20160406131357".to_string();
        forms[0].items[0].description = "Cotton shirt".to_string();
        forms[0].items[0].hs_tariff_number = "610910".to_string();
        forms[0].items[1].description = "Ceramic mug".to_string();

        // The mug is removed and a third shirt is added.
        let packages = vec![package("Test Box", vec![package_item("1", "Shirt", 3)])];
        let forms = regenerate_customs_forms(&packages, &catalog, "US", &forms);

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].contents_type, ContentsType::Gift);
        assert_eq!(forms[0].itn, "AES X20160406131357");
        assert_eq!(forms[0].items.len(), 1);
        assert_eq!(forms[0].items[0].description, "Cotton shirt");
        assert_eq!(forms[0].items[0].hs_tariff_number, "610910");
        assert_eq!(forms[0].items[0].quantity, Decimal::from(3));
    }

    #[test]
    fn test_regeneration_follows_package_set() {
        let catalog = sample_catalog();
        let first = regenerate_customs_forms(&[package("Test Box", vec![])], &catalog, "US", &[]);
        let second = regenerate_customs_forms(&[package("small_flat_box", vec![])], &catalog, "US", &first);

        assert_eq!(second.len(), 1);
        assert_eq!(second[0].package_id.as_str(), "small_flat_box");
        assert_eq!(second[0].package_name, "Small Flat Rate Box");
    }
}
