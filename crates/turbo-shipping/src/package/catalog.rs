//! Package catalog: the store's custom boxes and the carriers' predefined ones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::PackageId;

/// A box the merchant defined. Identified by its title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPackage {
    pub title: String,
    pub is_letter: bool,
    /// Dimensions as "L x W x H".
    pub dimensions: String,
    /// Weight of the empty box.
    pub box_weight: Decimal,
}

impl CustomPackage {
    pub fn id(&self) -> PackageId {
        PackageId::new(self.title.clone())
    }
}

/// A carrier-provided box. Carrier boxes carry no weight of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedPackage {
    pub id: PackageId,
    pub title: String,
    pub is_letter: bool,
    pub dimensions: String,
}

/// Predefined packages offered by one carrier service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedOption {
    pub title: String,
    pub packages: Vec<PredefinedPackage>,
}

/// Result of the package sync: everything the merchant can pick from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageCatalog {
    #[serde(default)]
    pub custom_packages: Vec<CustomPackage>,
    #[serde(default)]
    pub predefined_options: Vec<PredefinedOption>,
}

/// A package found in the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogPackage<'a> {
    Custom(&'a CustomPackage),
    Predefined(&'a PredefinedPackage),
}

impl<'a> CatalogPackage<'a> {
    pub fn title(&self) -> &'a str {
        match *self {
            CatalogPackage::Custom(package) => &package.title,
            CatalogPackage::Predefined(package) => &package.title,
        }
    }

    /// Box weight added to the default total weight. Only custom packages have one.
    pub fn box_weight(&self) -> Option<Decimal> {
        match self {
            CatalogPackage::Custom(package) => Some(package.box_weight),
            CatalogPackage::Predefined(_) => None,
        }
    }
}

impl PackageCatalog {
    /// Look up a package. Custom packages win over predefined ones with the same id.
    pub fn find(&self, id: &PackageId) -> Option<CatalogPackage<'_>> {
        if let Some(custom) = self
            .custom_packages
            .iter()
            .find(|package| package.title == id.as_str())
        {
            return Some(CatalogPackage::Custom(custom));
        }

        self.predefined_options
            .iter()
            .flat_map(|option| option.packages.iter())
            .find(|package| &package.id == id)
            .map(CatalogPackage::Predefined)
    }

    pub fn has_packages(&self) -> bool {
        !self.custom_packages.is_empty()
            || self.predefined_options.iter().any(|option| !option.packages.is_empty())
    }

    /// Display title for a package id, if it is in the catalog.
    pub fn title_of(&self, id: &PackageId) -> Option<&str> {
        self.find(id).map(|package| package.title())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_catalog() -> PackageCatalog {
        PackageCatalog {
            custom_packages: vec![CustomPackage {
                title: "Test Box".to_string(),
                is_letter: false,
                dimensions: "10 x 10 x 10".to_string(),
                box_weight: Decimal::new(5, 1),
            }],
            predefined_options: vec![PredefinedOption {
                title: "USPS Priority Mail Flat Rate Boxes".to_string(),
                packages: vec![PredefinedPackage {
                    id: PackageId::new("small_flat_box"),
                    title: "Small Flat Rate Box".to_string(),
                    is_letter: false,
                    dimensions: "21.91 x 13.65 x 4.13".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_find_custom_package() {
        let catalog = sample_catalog();
        let package = catalog.find(&PackageId::new("Test Box")).unwrap();
        assert_eq!(package.title(), "Test Box");
        assert_eq!(package.box_weight(), Some(Decimal::new(5, 1)));
    }

    #[test]
    fn test_find_predefined_package() {
        let catalog = sample_catalog();
        let package = catalog.find(&PackageId::new("small_flat_box")).unwrap();
        assert_eq!(package.title(), "Small Flat Rate Box");
        assert_eq!(package.box_weight(), None);
        assert_eq!(
            catalog.title_of(&PackageId::new("small_flat_box")),
            Some("Small Flat Rate Box")
        );
    }

    #[test]
    fn test_unknown_package() {
        let catalog = sample_catalog();
        assert!(catalog.find(&PackageId::new("missing")).is_none());
        assert!(catalog.has_packages());
        assert!(!PackageCatalog::default().has_packages());
    }
}
