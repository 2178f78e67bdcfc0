//! Shipping label form state machine.
//!
//! Owns the value of every step. Each setter replaces one value, applies
//! the invalidation rules for the steps that depend on it, and rebuilds the
//! step list with [`derive_steps`].

use tracing::{debug, info, warn};

use crate::address::{
    destination_country_choices, origin_country_choices, validate_address_locally, AddressFieldError,
    AddressValidationOutcome, AddressValidator, AddressVerification, Country, ShipType, ShippingAddress,
};
use crate::config::{PhoneRequirement, ShippingConfig};
use crate::customs::{is_eu_customs_scenario, regenerate_customs_forms, CustomsEligibility, CustomsForm};
use crate::ids::PackageId;
use crate::package::{OrderLineItem, PackageAttributes, PackageCatalog, PackageEditor};
use crate::payment::AccountSettings;
use crate::rates::SelectedRate;
use super::step::{derive_steps, DataState, DataStates, Step, StepInputs, StepKind};

/// State of one shipping label creation session.
#[derive(Debug, Clone)]
pub struct ShippingLabelForm {
    config: ShippingConfig,
    eligibility: CustomsEligibility,
    countries: Vec<Country>,
    origin_countries: Vec<Country>,
    destination_countries: Vec<Country>,
    origin_address: Option<ShippingAddress>,
    destination_address: Option<ShippingAddress>,
    catalog: PackageCatalog,
    packages: Vec<PackageAttributes>,
    customs_forms: Vec<CustomsForm>,
    selected_rates: Vec<SelectedRate>,
    account_settings: Option<AccountSettings>,
    data_states: DataStates,
    customs_active: bool,
    steps: Vec<Step>,
    is_validating_origin: bool,
    is_validating_destination: bool,
}

impl ShippingLabelForm {
    /// Start a session seeded with the addresses known from the order.
    ///
    /// Every step starts pending; seeded addresses still have to be validated.
    pub fn new(
        config: ShippingConfig,
        countries: Vec<Country>,
        origin_address: Option<ShippingAddress>,
        destination_address: Option<ShippingAddress>,
    ) -> Self {
        let eligibility = CustomsEligibility::from_config(&config);
        let mut form = Self {
            config,
            eligibility,
            countries: Vec::new(),
            origin_countries: Vec::new(),
            destination_countries: Vec::new(),
            origin_address,
            destination_address,
            catalog: PackageCatalog::default(),
            packages: Vec::new(),
            customs_forms: Vec::new(),
            selected_rates: Vec::new(),
            account_settings: None,
            data_states: DataStates::default(),
            customs_active: false,
            steps: Vec::new(),
            is_validating_origin: false,
            is_validating_destination: false,
        };
        form.set_countries(countries);
        form.refresh_customs();
        form.rebuild_steps();
        form
    }

    /// Replace the country reference data.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.refresh_country_choices();
    }

    pub fn set_origin_address(&mut self, address: ShippingAddress, validated: bool) -> &[Step] {
        self.origin_address = Some(address);
        self.apply_address_change(StepKind::ShipFrom, validated)
    }

    pub fn set_destination_address(&mut self, address: ShippingAddress, validated: bool) -> &[Step] {
        self.destination_address = Some(address);
        self.refresh_country_choices();
        self.apply_address_change(StepKind::ShipTo, validated)
    }

    fn apply_address_change(&mut self, kind: StepKind, validated: bool) -> &[Step] {
        self.data_states.set(kind, DataState::from_validated(validated));
        self.clear_rates();
        self.refresh_customs();
        self.rebuild_steps();

        debug!(
            step = kind.as_str(),
            validated,
            customs_required = self.customs_active,
            phone_missing = self.phone_missing(),
            "address updated"
        );
        &self.steps
    }

    /// Replace the packages of the shipment.
    ///
    /// Rates are cleared. Customs forms are rebuilt for the new packages,
    /// keeping declarations of items that are still packed.
    pub fn set_package_details(&mut self, packages: Vec<PackageAttributes>) -> &[Step] {
        let validated = !packages.is_empty() && packages.iter().all(PackageAttributes::is_valid);
        self.packages = packages;
        self.data_states
            .set(StepKind::PackageDetails, DataState::from_validated(validated));
        self.clear_rates();

        if self.customs_active {
            self.customs_forms = regenerate_customs_forms(
                &self.packages,
                &self.catalog,
                self.origin_country(),
                &self.customs_forms,
            );
            self.data_states.set(StepKind::Customs, DataState::Pending);
        }
        self.rebuild_steps();

        debug!(
            step = StepKind::PackageDetails.as_str(),
            packages = self.packages.len(),
            validated,
            "package details updated"
        );
        &self.steps
    }

    /// Replace the customs forms.
    ///
    /// Forms for packages that are not in the shipment are dropped and the
    /// last form per package wins. A package without a submitted form keeps
    /// its current form, and the step stays pending until every package has
    /// a submitted form.
    pub fn set_customs_forms(&mut self, forms: Vec<CustomsForm>, validated: bool) -> &[Step] {
        if self.customs_active {
            let mut submitted: Vec<CustomsForm> = Vec::with_capacity(forms.len());
            for form in forms {
                if !self.has_package(&form.package_id) {
                    warn!(package = %form.package_id, "customs form for unknown package dropped");
                    continue;
                }
                submitted.retain(|existing| existing.package_id != form.package_id);
                submitted.push(form);
            }

            let complete = !self.packages.is_empty()
                && self
                    .packages
                    .iter()
                    .all(|package| submitted.iter().any(|form| form.package_id == package.package_id));
            if !complete {
                warn!(
                    packages = self.packages.len(),
                    forms = submitted.len(),
                    "customs forms do not cover every package"
                );
            }

            let current = regenerate_customs_forms(
                &self.packages,
                &self.catalog,
                self.origin_country(),
                &self.customs_forms,
            );
            self.customs_forms = current
                .into_iter()
                .map(|form| {
                    match submitted.iter().position(|new| new.package_id == form.package_id) {
                        Some(index) => submitted.swap_remove(index),
                        None => form,
                    }
                })
                .collect();
            self.data_states.set(
                StepKind::Customs,
                DataState::from_validated(validated && complete),
            );
        } else {
            warn!(forms = forms.len(), "customs forms ignored, shipment does not need customs");
        }
        self.clear_rates();
        self.rebuild_steps();

        debug!(
            step = StepKind::Customs.as_str(),
            validated = self.data_states.customs.is_validated(),
            "customs forms updated"
        );
        &self.steps
    }

    /// Replace the selected rates.
    ///
    /// Rates for packages that are not in the shipment are dropped, and only
    /// the last rate per package is kept. `editable` is the caller's view of
    /// the step; the derived display mode is authoritative.
    pub fn set_selected_rates(&mut self, rates: Vec<SelectedRate>, editable: bool) -> &[Step] {
        let mut kept: Vec<SelectedRate> = Vec::with_capacity(rates.len());
        for rate in rates {
            if !self.has_package(&rate.package_id) {
                warn!(package = %rate.package_id, "rate for unknown package dropped");
                continue;
            }
            kept.retain(|existing| existing.package_id != rate.package_id);
            kept.push(rate);
        }
        self.selected_rates = kept;

        let validated = !self.packages.is_empty()
            && self
                .packages
                .iter()
                .all(|package| self.selected_rate(&package.package_id).is_some());
        self.data_states
            .set(StepKind::CarrierAndRates, DataState::from_validated(validated));
        self.rebuild_steps();

        debug!(
            step = StepKind::CarrierAndRates.as_str(),
            rates = self.selected_rates.len(),
            validated,
            editable,
            "selected rates updated"
        );
        &self.steps
    }

    /// Replace the account settings. The step is validated once a payment
    /// method id other than zero is selected.
    pub fn set_payment_settings(&mut self, settings: AccountSettings, editable: bool) -> &[Step] {
        let validated = settings.has_selected_payment_method();
        self.account_settings = Some(settings);
        self.data_states
            .set(StepKind::PaymentMethod, DataState::from_validated(validated));
        self.rebuild_steps();

        debug!(
            step = StepKind::PaymentMethod.as_str(),
            validated,
            editable,
            "payment settings updated"
        );
        &self.steps
    }

    /// Store the result of the package sync. Customs form package names are
    /// refreshed; nothing is invalidated.
    pub fn set_package_catalog(&mut self, catalog: PackageCatalog) {
        self.catalog = catalog;
        if self.customs_active {
            self.customs_forms = regenerate_customs_forms(
                &self.packages,
                &self.catalog,
                self.origin_country(),
                &self.customs_forms,
            );
        }
    }

    /// Validate one of the addresses with the remote service.
    ///
    /// An address without a name fails locally and the service is not called.
    pub async fn validate_address<V>(&mut self, ship_type: ShipType, validator: &V) -> AddressValidationOutcome
    where
        V: AddressValidator + ?Sized,
    {
        let Some(address) = self.address(ship_type).cloned() else {
            warn!(ship_type = ship_type.as_str(), "no address to validate");
            return AddressValidationOutcome::address_missing();
        };
        if !address.has_name() {
            warn!(ship_type = ship_type.as_str(), "address validation skipped, name is missing");
            return AddressValidationOutcome::name_required();
        }

        self.set_validating(ship_type, true);
        let result = validator.validate(AddressVerification { address, ship_type }).await;
        self.set_validating(ship_type, false);

        if let Err(error) = &result {
            warn!(ship_type = ship_type.as_str(), %error, "address validation failed");
        }
        AddressValidationOutcome::from_result(result)
    }

    /// Field errors for one of the addresses, without a network call.
    pub fn local_address_errors(&self, ship_type: ShipType) -> Vec<AddressFieldError> {
        match self.address(ship_type) {
            Some(address) => validate_address_locally(address, &self.countries, self.phone_required()),
            None => vec![AddressFieldError::Address],
        }
    }

    /// Package editor for the first package. Without a submitted package the
    /// package used for the previous label is preselected.
    pub fn package_editor(&self, line_items: Vec<OrderLineItem>) -> PackageEditor {
        let mut editor = PackageEditor::new(line_items, &self.catalog, self.packages.first());
        if editor.selected_package().is_none() {
            let last_selected = self
                .account_settings
                .as_ref()
                .and_then(|settings| settings.last_selected_package_id.clone())
                .filter(|id| self.catalog.find(id).is_some());
            if let Some(package_id) = last_selected {
                editor.select_package(&self.catalog, package_id);
            }
        }
        editor
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, kind: StepKind) -> Option<&Step> {
        self.steps.iter().find(|step| step.kind == kind)
    }

    pub fn customs_required(&self) -> bool {
        self.customs_active
    }

    /// Shipments from the US into the EU need longer item descriptions.
    pub fn is_eu_customs_scenario(&self) -> bool {
        match (&self.origin_address, &self.destination_address) {
            (Some(origin), Some(destination)) => is_eu_customs_scenario(&origin.country, &destination.country),
            _ => false,
        }
    }

    pub fn origin_address(&self) -> Option<&ShippingAddress> {
        self.origin_address.as_ref()
    }

    pub fn destination_address(&self) -> Option<&ShippingAddress> {
        self.destination_address.as_ref()
    }

    pub fn address(&self, ship_type: ShipType) -> Option<&ShippingAddress> {
        match ship_type {
            ShipType::Origin => self.origin_address.as_ref(),
            ShipType::Destination => self.destination_address.as_ref(),
        }
    }

    pub fn packages(&self) -> &[PackageAttributes] {
        &self.packages
    }

    pub fn customs_forms(&self) -> &[CustomsForm] {
        &self.customs_forms
    }

    pub fn selected_rates(&self) -> &[SelectedRate] {
        &self.selected_rates
    }

    pub fn selected_rate(&self, package_id: &PackageId) -> Option<&SelectedRate> {
        self.selected_rates.iter().find(|rate| &rate.package_id == package_id)
    }

    pub fn account_settings(&self) -> Option<&AccountSettings> {
        self.account_settings.as_ref()
    }

    pub fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }

    /// Countries the origin address can use.
    pub fn origin_countries(&self) -> &[Country] {
        &self.origin_countries
    }

    /// Countries the destination address can use.
    pub fn destination_countries(&self) -> &[Country] {
        &self.destination_countries
    }

    pub fn is_validating(&self, ship_type: ShipType) -> bool {
        match ship_type {
            ShipType::Origin => self.is_validating_origin,
            ShipType::Destination => self.is_validating_destination,
        }
    }

    /// The order summary is shown once every step is validated and editable.
    pub fn order_summary_available(&self) -> bool {
        self.steps.iter().all(|step| step.is_validated() && step.is_editable())
    }

    /// Whether rate selection needs phone numbers on both addresses.
    pub fn phone_required(&self) -> bool {
        match self.config.phone_requirement {
            PhoneRequirement::Always => true,
            PhoneRequirement::CustomsOnly => self.customs_active,
        }
    }

    fn phone_missing(&self) -> bool {
        let has_phone = |address: &Option<ShippingAddress>| address.as_ref().is_some_and(ShippingAddress::has_phone);
        self.phone_required() && !(has_phone(&self.origin_address) && has_phone(&self.destination_address))
    }

    fn has_package(&self, package_id: &PackageId) -> bool {
        self.packages.iter().any(|package| &package.package_id == package_id)
    }

    fn origin_country(&self) -> &str {
        self.origin_address
            .as_ref()
            .map(|address| address.country.as_str())
            .unwrap_or_default()
    }

    fn set_validating(&mut self, ship_type: ShipType, validating: bool) {
        match ship_type {
            ShipType::Origin => self.is_validating_origin = validating,
            ShipType::Destination => self.is_validating_destination = validating,
        }
    }

    fn clear_rates(&mut self) {
        self.selected_rates.clear();
        self.data_states.set(StepKind::CarrierAndRates, DataState::Pending);
    }

    fn refresh_country_choices(&mut self) {
        self.origin_countries = origin_country_choices(&self.countries, &self.config.carrier_supported_countries);
        self.destination_countries = destination_country_choices(&self.countries);
    }

    /// Insert or remove the customs step. Forms survive while the step stays.
    fn refresh_customs(&mut self) {
        let required = self
            .eligibility
            .required_for(self.origin_address.as_ref(), self.destination_address.as_ref());
        if required == self.customs_active {
            return;
        }

        if required {
            self.customs_forms = regenerate_customs_forms(&self.packages, &self.catalog, self.origin_country(), &[]);
            info!(packages = self.packages.len(), "customs step added");
        } else {
            self.customs_forms.clear();
            info!("customs step removed");
        }
        self.data_states.set(StepKind::Customs, DataState::Pending);
        self.customs_active = required;
    }

    fn rebuild_steps(&mut self) {
        self.steps = derive_steps(&StepInputs {
            data_states: self.data_states,
            customs_required: self.customs_active,
            phone_missing: self.phone_missing(),
        });
    }
}
