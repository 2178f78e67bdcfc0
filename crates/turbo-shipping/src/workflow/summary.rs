//! Row bodies of the form and the order summary.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ids::PackageId;
use crate::money::Money;
use crate::payment::PaymentMethod;
use super::form::ShippingLabelForm;

pub const PACKAGE_DETAILS_PLACEHOLDER: &str = "Select the type of packaging you'd like to ship your items in";
pub const CARRIER_AND_RATES_PLACEHOLDER: &str = "Select your shipping carrier and rates";
pub const PAYMENT_METHOD_PLACEHOLDER: &str = "Add a new credit card";

/// One package in the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryLine {
    pub package_id: PackageId,
    /// Carrier service title.
    pub title: String,
    pub price: Money,
}

/// What the merchant is about to pay for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderSummaryLine>,
    pub total: Money,
    pub payment_method: Option<PaymentMethod>,
    pub email_receipts: bool,
}

impl ShippingLabelForm {
    pub fn package_details_body(&self) -> String {
        if self.packages().is_empty() {
            return PACKAGE_DETAILS_PLACEHOLDER.to_string();
        }
        let unit = &self.config().weight_unit;
        self.packages()
            .iter()
            .map(|package| {
                let title = self
                    .catalog()
                    .title_of(&package.package_id)
                    .unwrap_or_else(|| package.package_id.as_str());
                format!("{}\nTotal package weight: {} {}", title, package.total_weight, unit)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn carrier_and_rates_body(&self) -> String {
        if self.selected_rates().is_empty() {
            return CARRIER_AND_RATES_PLACEHOLDER.to_string();
        }
        self.selected_rates()
            .iter()
            .map(|selected| {
                let rate = selected.effective_rate();
                match selected.rate.delivery_estimate() {
                    Some(estimate) => format!("{}\n{} - {}", selected.rate.title, rate.retail_rate, estimate),
                    None => format!("{}\n{}", selected.rate.title, rate.retail_rate),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn payment_method_body(&self) -> String {
        match self
            .account_settings()
            .and_then(|settings| settings.selected_payment_method())
        {
            Some(method) => format!("Credit card ending in {}", method.card_digits),
            None => PAYMENT_METHOD_PLACEHOLDER.to_string(),
        }
    }

    /// Summary of the label purchase, once every step is done.
    pub fn order_summary(&self) -> Option<OrderSummary> {
        if !self.order_summary_available() {
            return None;
        }

        let lines: Vec<OrderSummaryLine> = self
            .selected_rates()
            .iter()
            .map(|selected| OrderSummaryLine {
                package_id: selected.package_id.clone(),
                title: selected.rate.title.clone(),
                price: selected.effective_rate().retail_rate,
            })
            .collect();

        let currency = self.config().currency;
        let Some(total) = Money::sum(lines.iter().map(|line| &line.price), currency) else {
            warn!(currency = %currency, "selected rates use more than one currency");
            return None;
        };

        let settings = self.account_settings();
        Some(OrderSummary {
            lines,
            total,
            payment_method: settings.and_then(|s| s.selected_payment_method()).cloned(),
            email_receipts: settings.is_some_and(|s| s.email_receipts),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::address::{Country, ShippingAddress};
    use crate::config::ShippingConfig;
    use crate::money::Currency;
    use crate::package::catalog::tests::sample_catalog;
    use crate::package::PackageAttributes;
    use crate::payment::AccountSettings;
    use crate::rates::{CarrierRate, SelectedRate};

    fn address() -> ShippingAddress {
        ShippingAddress::new("Jane Doe", "1 Main St", "Albany", "NY", "12207", "US").with_phone("5185550100")
    }

    fn rate(package_id: &str, cents: i64) -> SelectedRate {
        SelectedRate::new(
            package_id,
            CarrierRate::new("rate_1", "USPS - Priority Mail", "usps", Money::new(cents, Currency::USD))
                .with_delivery_days(2),
        )
    }

    fn card_settings() -> AccountSettings {
        AccountSettings {
            payment_methods: vec![PaymentMethod {
                payment_method_id: 7,
                name: "Jane Doe".to_string(),
                card_type: "visa".to_string(),
                card_digits: "4242".to_string(),
                expiry: "2030-12-31".to_string(),
            }],
            email_receipts: true,
            ..AccountSettings::default()
        }
        .with_selected_payment_method(7)
    }

    fn form() -> ShippingLabelForm {
        let mut form = ShippingLabelForm::new(
            ShippingConfig::default(),
            vec![Country::new("US", "United States", vec![])],
            None,
            None,
        );
        form.set_package_catalog(sample_catalog());
        form
    }

    #[test]
    fn test_placeholders() {
        let form = form();
        assert_eq!(form.package_details_body(), PACKAGE_DETAILS_PLACEHOLDER);
        assert_eq!(form.carrier_and_rates_body(), CARRIER_AND_RATES_PLACEHOLDER);
        assert_eq!(form.payment_method_body(), PAYMENT_METHOD_PLACEHOLDER);
        assert!(form.order_summary().is_none());
    }

    #[test]
    fn test_package_body_without_catalog_title() {
        let mut form = form();
        form.set_package_details(vec![PackageAttributes::new("retired_box", "1.0", vec![])]);
        assert_eq!(form.package_details_body(), "retired_box\nTotal package weight: 1.0 lbs");
    }

    #[test]
    fn test_bodies() {
        let mut form = form();
        form.set_package_details(vec![PackageAttributes::new("Test Box", "3.5", vec![])]);
        assert_eq!(form.package_details_body(), "Test Box\nTotal package weight: 3.5 lbs");

        let mut selected = rate("Test Box", 750);
        selected.signature_rate = Some(CarrierRate::new(
            "rate_2",
            "USPS - Priority Mail",
            "usps",
            Money::new(1025, Currency::USD),
        ));
        form.set_selected_rates(vec![selected], true);
        assert_eq!(
            form.carrier_and_rates_body(),
            "USPS - Priority Mail\n$10.25 - 2 business days"
        );

        form.set_payment_settings(card_settings(), true);
        assert_eq!(form.payment_method_body(), "Credit card ending in 4242");
    }

    #[test]
    fn test_order_summary() {
        let mut form = form();
        form.set_origin_address(address(), true);
        form.set_destination_address(address(), true);
        form.set_package_details(vec![
            PackageAttributes::new("Test Box", "3.5", vec![]),
            PackageAttributes::new("small_flat_box", "1.0", vec![]),
        ]);
        form.set_selected_rates(vec![rate("Test Box", 750), rate("small_flat_box", 1250)], true);
        form.set_payment_settings(card_settings(), true);

        let summary = form.order_summary().unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.total, Money::new(2000, Currency::USD));
        assert_eq!(summary.payment_method.unwrap().card_digits, "4242");
        assert!(summary.email_receipts);
        assert_eq!(summary.total.to_decimal(), Decimal::new(2000, 2));
    }
}
