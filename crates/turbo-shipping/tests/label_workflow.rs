//! End-to-end shipping label scenarios.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use turbo_shipping::customs::{customs_forms_valid, validate_customs_form};
use turbo_shipping::prelude::*;

struct CountingValidator {
    calls: AtomicUsize,
}

impl CountingValidator {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressValidator for CountingValidator {
    async fn validate(
        &self,
        request: AddressVerification,
    ) -> Result<AddressValidationSuccess, AddressValidationFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AddressValidationSuccess {
            is_trivial_normalization: false,
            address: request.address.with_postcode("14304-1234"),
        })
    }
}

fn countries() -> Vec<Country> {
    vec![
        Country::new(
            "US",
            "United States",
            vec![
                CountryState::new("NY", "New York"),
                CountryState::new("CA", "California"),
                CountryState::new("AA", "Armed Forces Americas"),
            ],
        ),
        Country::new("VN", "Vietnam", vec![]),
    ]
}

fn catalog() -> PackageCatalog {
    PackageCatalog {
        custom_packages: vec![CustomPackage {
            title: "Shoe Box".to_string(),
            is_letter: false,
            dimensions: "12 x 8 x 5".to_string(),
            box_weight: Decimal::new(25, 2),
        }],
        predefined_options: vec![PredefinedOption {
            title: "USPS Priority Mail Flat Rate Boxes".to_string(),
            packages: vec![PredefinedPackage {
                id: PackageId::new("medium_flat_box_top"),
                title: "Medium Flat Rate Box 1, Top Loading".to_string(),
                is_letter: false,
                dimensions: "11 x 8.5 x 5.5".to_string(),
            }],
        }],
    }
}

fn line_items() -> Vec<OrderLineItem> {
    vec![
        OrderLineItem::new("1", "Running shoes", Decimal::ONE)
            .with_weight(Decimal::new(18, 1))
            .with_value(Decimal::new(8900, 2)),
        OrderLineItem::new("2", "Gift wrapping", Decimal::ONE).virtual_item(),
    ]
}

fn origin() -> ShippingAddress {
    ShippingAddress::new("Johnny Appleseed", "234 70th Street", "Niagara Falls", "NY", "14304", "US")
        .with_phone("0123456789")
}

fn vietnam() -> ShippingAddress {
    ShippingAddress::new("Tran Thi B", "5 Nguyen Hue", "Ho Chi Minh City", "", "700000", "VN").with_phone("0281234567")
}

fn rate(package_id: &PackageId) -> SelectedRate {
    SelectedRate::new(
        package_id.clone(),
        CarrierRate::new(
            "rate_a8a29d5f34984722942f466c30ea27ef",
            "USPS - Priority Mail International",
            "usps",
            Money::new(4230, Currency::USD),
        )
        .with_delivery_days(6),
    )
}

#[test]
fn test_international_shipment_end_to_end() {
    let mut form = ShippingLabelForm::new(ShippingConfig::default(), countries(), None, None);
    form.set_package_catalog(catalog());

    form.set_origin_address(origin(), true);
    form.set_destination_address(vietnam(), true);

    assert!(form.customs_required());
    assert_eq!(form.step(StepKind::ShipFrom).unwrap().data_state, DataState::Validated);
    assert_eq!(form.step(StepKind::ShipTo).unwrap().data_state, DataState::Validated);
    assert_eq!(
        form.step(StepKind::CarrierAndRates).unwrap().display_mode,
        DisplayMode::Disabled
    );

    // Package: shoes (1.8) in the shoe box (0.25).
    let mut editor = form.package_editor(line_items());
    editor.select_package(form.catalog(), PackageId::new("Shoe Box"));
    assert_eq!(editor.displayed_weight(), "2.05");
    let package = editor.validated_attributes().unwrap();
    let package_id = package.package_id.clone();
    form.set_package_details(vec![package]);

    // Customs: one form for the package, declaring only the shoes.
    let forms = form.customs_forms().to_vec();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].items.len(), 1);
    assert_eq!(forms[0].items[0].origin_country, "US");
    assert!(validate_customs_form(&forms[0], "VN", form.is_eu_customs_scenario()).is_empty());
    assert!(customs_forms_valid(&forms, "VN", false));
    form.set_customs_forms(forms, true);

    assert_eq!(
        form.step(StepKind::CarrierAndRates).unwrap().display_mode,
        DisplayMode::Editable
    );

    form.set_selected_rates(vec![rate(&package_id)], true);
    assert_eq!(
        form.carrier_and_rates_body(),
        "USPS - Priority Mail International\n$42.30 - 6 business days"
    );

    let settings = AccountSettings {
        payment_methods: vec![PaymentMethod {
            payment_method_id: 11743265,
            name: "Johnny Appleseed".to_string(),
            card_type: "visa".to_string(),
            card_digits: "4242".to_string(),
            expiry: "2030-12-31".to_string(),
        }],
        ..AccountSettings::default()
    }
    .with_selected_payment_method(11743265);
    form.set_payment_settings(settings, true);

    let summary = form.order_summary().expect("all steps are done");
    assert_eq!(summary.total, Money::new(4230, Currency::USD));
    assert_eq!(form.steps().len(), 6);
}

#[test]
fn test_military_destination_requires_customs() {
    let mut form = ShippingLabelForm::new(ShippingConfig::default(), countries(), None, None);
    form.set_origin_address(origin().with_state("AA"), true);
    form.set_destination_address(origin(), true);

    assert!(customs_required(
        form.origin_address().unwrap(),
        form.destination_address().unwrap()
    ));
    assert!(form.step(StepKind::Customs).is_some());
}

#[test]
fn test_domestic_shipment_has_no_customs() {
    let mut form = ShippingLabelForm::new(ShippingConfig::default(), countries(), None, None);
    form.set_origin_address(origin(), true);
    form.set_destination_address(origin().with_state("CA"), true);
    assert!(form.step(StepKind::Customs).is_none());

    form.set_destination_address(vietnam(), true);
    assert!(form.step(StepKind::Customs).is_some());
}

#[test]
fn test_manual_weight_kept_across_packages() {
    let catalog = catalog();
    let mut editor = PackageEditor::new(line_items(), &catalog, None);
    editor.select_package(&catalog, PackageId::new("Shoe Box"));
    assert_eq!(editor.displayed_weight(), "2.05");

    editor.edit_total_weight("3");
    editor.select_package(&catalog, PackageId::new("medium_flat_box_top"));
    assert_eq!(editor.displayed_weight(), "3");
    assert_eq!(editor.total_weight(), &TotalWeight::Override("3".to_string()));
}

#[tokio::test]
async fn test_address_without_name_is_not_sent() {
    let mut form = ShippingLabelForm::new(
        ShippingConfig::default(),
        countries(),
        Some(origin().with_name("")),
        Some(vietnam()),
    );
    let validator = CountingValidator::new();

    let outcome = form.validate_address(ShipType::Origin, &validator).await;
    assert_eq!(
        outcome,
        AddressValidationOutcome::ValidationError(AddressValidationError::general("Name is required"))
    );
    assert_eq!(validator.calls(), 0);

    let outcome = form.validate_address(ShipType::Destination, &validator).await;
    assert!(matches!(outcome, AddressValidationOutcome::SuggestedAddress(_)));
    assert_eq!(validator.calls(), 1);
}

#[tokio::test]
async fn test_validator_behind_trait_object() {
    let mut form = ShippingLabelForm::new(ShippingConfig::default(), countries(), Some(origin()), None);
    let validator: Box<dyn AddressValidator> = Box::new(CountingValidator::new());

    let outcome = form.validate_address(ShipType::Origin, validator.as_ref()).await;
    match outcome {
        AddressValidationOutcome::SuggestedAddress(success) => {
            assert_eq!(success.address.postcode, "14304-1234");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
