//! Steps of the shipping label form and how their display modes are derived.

use serde::{Deserialize, Serialize};

/// Steps of the shipping label form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Origin address.
    ShipFrom,
    /// Destination address.
    ShipTo,
    /// Package selection and weight.
    PackageDetails,
    /// Customs declaration. Only present for international or military shipments.
    Customs,
    /// Carrier, service and signature options.
    CarrierAndRates,
    /// Card used to pay for the label.
    PaymentMethod,
}

/// Every step, in form order.
pub const STEP_ORDER: [StepKind; 6] = [
    StepKind::ShipFrom,
    StepKind::ShipTo,
    StepKind::PackageDetails,
    StepKind::Customs,
    StepKind::CarrierAndRates,
    StepKind::PaymentMethod,
];

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::ShipFrom => "ship_from",
            StepKind::ShipTo => "ship_to",
            StepKind::PackageDetails => "package_details",
            StepKind::Customs => "customs",
            StepKind::CarrierAndRates => "carrier_and_rates",
            StepKind::PaymentMethod => "payment_method",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StepKind::ShipFrom => "Ship from",
            StepKind::ShipTo => "Ship to",
            StepKind::PackageDetails => "Package Details",
            StepKind::Customs => "Customs",
            StepKind::CarrierAndRates => "Shipping Carrier and Rates",
            StepKind::PaymentMethod => "Payment Method",
        }
    }
}

/// Whether a step's value has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataState {
    #[default]
    Pending,
    Validated,
}

impl DataState {
    pub fn from_validated(validated: bool) -> Self {
        if validated {
            DataState::Validated
        } else {
            DataState::Pending
        }
    }

    pub fn is_validated(&self) -> bool {
        matches!(self, DataState::Validated)
    }
}

/// Whether a step can be interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Editable,
    Disabled,
}

/// A step as shown in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub data_state: DataState,
    pub display_mode: DisplayMode,
}

impl Step {
    pub fn is_validated(&self) -> bool {
        self.data_state.is_validated()
    }

    pub fn is_editable(&self) -> bool {
        self.display_mode == DisplayMode::Editable
    }
}

/// Data state of every step, customs included even while it is not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataStates {
    pub ship_from: DataState,
    pub ship_to: DataState,
    pub package_details: DataState,
    pub customs: DataState,
    pub carrier_and_rates: DataState,
    pub payment_method: DataState,
}

impl DataStates {
    pub fn get(&self, kind: StepKind) -> DataState {
        match kind {
            StepKind::ShipFrom => self.ship_from,
            StepKind::ShipTo => self.ship_to,
            StepKind::PackageDetails => self.package_details,
            StepKind::Customs => self.customs,
            StepKind::CarrierAndRates => self.carrier_and_rates,
            StepKind::PaymentMethod => self.payment_method,
        }
    }

    pub fn set(&mut self, kind: StepKind, state: DataState) {
        let slot = match kind {
            StepKind::ShipFrom => &mut self.ship_from,
            StepKind::ShipTo => &mut self.ship_to,
            StepKind::PackageDetails => &mut self.package_details,
            StepKind::Customs => &mut self.customs,
            StepKind::CarrierAndRates => &mut self.carrier_and_rates,
            StepKind::PaymentMethod => &mut self.payment_method,
        };
        *slot = state;
    }
}

/// Steps in the form, with customs only when a declaration is needed.
pub fn steps_for(customs_required: bool) -> Vec<StepKind> {
    STEP_ORDER
        .into_iter()
        .filter(|kind| customs_required || *kind != StepKind::Customs)
        .collect()
}

/// Everything the step list is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInputs {
    pub data_states: DataStates,
    pub customs_required: bool,
    /// A phone needed for rate selection is missing on one of the addresses.
    pub phone_missing: bool,
}

/// Build the step list from scratch.
///
/// The first step is always editable. Any other step is editable only when
/// every step above it is validated. Carrier and rates is also disabled while
/// a required phone number is missing.
pub fn derive_steps(inputs: &StepInputs) -> Vec<Step> {
    let mut preceding_validated = true;

    steps_for(inputs.customs_required)
        .into_iter()
        .map(|kind| {
            let blocked = kind == StepKind::CarrierAndRates && inputs.phone_missing;
            let display_mode = if preceding_validated && !blocked {
                DisplayMode::Editable
            } else {
                DisplayMode::Disabled
            };
            let data_state = inputs.data_states.get(kind);
            preceding_validated &= data_state.is_validated();

            Step {
                kind,
                data_state,
                display_mode,
            }
        })
        .collect()
}
