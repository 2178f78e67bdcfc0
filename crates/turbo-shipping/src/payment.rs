//! Payment methods and shipping label account settings.

use serde::{Deserialize, Serialize};

use crate::ids::PackageId;

/// Payment method id meaning "none selected".
///
/// A real method with id 0 is indistinguishable from no selection.
pub const NO_PAYMENT_METHOD: i64 = 0;

/// A stored card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub payment_method_id: i64,
    /// Cardholder name.
    pub name: String,
    /// Card brand, e.g. "visa".
    pub card_type: String,
    /// Last four digits.
    pub card_digits: String,
    /// Expiry as "YYYY-MM-DD".
    pub expiry: String,
}

/// Shipping label account settings: available cards and the chosen one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub can_manage_payments: bool,
    #[serde(default)]
    pub selected_payment_method_id: i64,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    /// Email the label receipt to the store owner.
    #[serde(default)]
    pub email_receipts: bool,
    /// Package picked for the previous label, used as the initial selection.
    #[serde(default)]
    pub last_selected_package_id: Option<PackageId>,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            can_manage_payments: false,
            selected_payment_method_id: NO_PAYMENT_METHOD,
            payment_methods: Vec::new(),
            email_receipts: false,
            last_selected_package_id: None,
        }
    }
}

impl AccountSettings {
    pub fn has_selected_payment_method(&self) -> bool {
        self.selected_payment_method_id != NO_PAYMENT_METHOD
    }

    pub fn selected_payment_method(&self) -> Option<&PaymentMethod> {
        if !self.has_selected_payment_method() {
            return None;
        }
        self.payment_methods
            .iter()
            .find(|method| method.payment_method_id == self.selected_payment_method_id)
    }

    pub fn with_selected_payment_method(self, payment_method_id: i64) -> Self {
        Self {
            selected_payment_method_id: payment_method_id,
            ..self
        }
    }
}
