//! Carrier rates and the rates selected per package.

use serde::{Deserialize, Serialize};

use crate::ids::{PackageId, RateId};
use crate::money::Money;

/// A priced carrier service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRate {
    pub rate_id: RateId,
    /// Service name, e.g. "USPS - Priority Mail".
    pub title: String,
    /// Carrier identifier, e.g. "usps".
    pub carrier_id: String,
    /// Price charged to the merchant.
    pub retail_rate: Money,
    /// Estimated business days to delivery.
    pub delivery_days: Option<u32>,
}

impl CarrierRate {
    pub fn new(rate_id: impl Into<RateId>, title: impl Into<String>, carrier_id: impl Into<String>, retail_rate: Money) -> Self {
        Self {
            rate_id: rate_id.into(),
            title: title.into(),
            carrier_id: carrier_id.into(),
            retail_rate,
            delivery_days: None,
        }
    }

    pub fn with_delivery_days(self, days: u32) -> Self {
        Self {
            delivery_days: Some(days),
            ..self
        }
    }

    /// "1 business day", "3 business days".
    pub fn delivery_estimate(&self) -> Option<String> {
        match self.delivery_days {
            Some(1) => Some("1 business day".to_string()),
            Some(days) => Some(format!("{} business days", days)),
            None => None,
        }
    }
}

/// Delivery confirmation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureOption {
    #[default]
    None,
    SignatureRequired,
    AdultSignatureRequired,
}

/// One carrier service offered for a package, with its signature variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRateOffer {
    pub default_rate: CarrierRate,
    #[serde(default)]
    pub signature_rate: Option<CarrierRate>,
    #[serde(default)]
    pub adult_signature_rate: Option<CarrierRate>,
}

impl CarrierRateOffer {
    pub fn rate_for(&self, option: SignatureOption) -> Option<&CarrierRate> {
        match option {
            SignatureOption::None => Some(&self.default_rate),
            SignatureOption::SignatureRequired => self.signature_rate.as_ref(),
            SignatureOption::AdultSignatureRequired => self.adult_signature_rate.as_ref(),
        }
    }

    /// Extra cost of a signature option over the base rate. `None` when the
    /// option is not offered or the currencies differ.
    pub fn surcharge(&self, option: SignatureOption) -> Option<Money> {
        self.rate_for(option)?
            .retail_rate
            .try_subtract(&self.default_rate.retail_rate)
    }
}

/// Rates returned by the rate sync for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRates {
    pub package_id: PackageId,
    pub offers: Vec<CarrierRateOffer>,
}

/// The rate chosen for a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRate {
    pub package_id: PackageId,
    pub rate: CarrierRate,
    #[serde(default)]
    pub signature_rate: Option<CarrierRate>,
    #[serde(default)]
    pub adult_signature_rate: Option<CarrierRate>,
}

impl SelectedRate {
    pub fn new(package_id: impl Into<PackageId>, rate: CarrierRate) -> Self {
        Self {
            package_id: package_id.into(),
            rate,
            signature_rate: None,
            adult_signature_rate: None,
        }
    }

    /// Select an offer with a signature option. Falls back to the base rate
    /// when the option is not offered.
    pub fn from_offer(package_id: impl Into<PackageId>, offer: &CarrierRateOffer, option: SignatureOption) -> Self {
        let mut selected = Self::new(package_id, offer.default_rate.clone());
        match option {
            SignatureOption::None => {}
            SignatureOption::SignatureRequired => selected.signature_rate = offer.signature_rate.clone(),
            SignatureOption::AdultSignatureRequired => {
                selected.adult_signature_rate = offer.adult_signature_rate.clone()
            }
        }
        selected
    }

    /// The rate that will be charged: signature, then adult signature, then base.
    pub fn effective_rate(&self) -> &CarrierRate {
        self.signature_rate
            .as_ref()
            .or(self.adult_signature_rate.as_ref())
            .unwrap_or(&self.rate)
    }

    pub fn signature_option(&self) -> SignatureOption {
        if self.signature_rate.is_some() {
            SignatureOption::SignatureRequired
        } else if self.adult_signature_rate.is_some() {
            SignatureOption::AdultSignatureRequired
        } else {
            SignatureOption::None
        }
    }
}
