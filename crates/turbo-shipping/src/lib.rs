//! Shipping label creation workflow for TurboCommerce.
//!
//! This crate holds the logic behind the multi-step "Create Shipping Label"
//! form:
//!
//! - **Address**: Shipping addresses, country data, local and remote validation
//! - **Customs**: When a declaration is needed, per-package forms, validation
//! - **Package**: Line items, package catalog, default weight with overrides
//! - **Rates**: Carrier rate offers and the rate selected per package
//! - **Payment**: Account settings and payment methods
//! - **Workflow**: The step state machine that ties everything together
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_shipping::prelude::*;
//!
//! let mut form = ShippingLabelForm::new(ShippingConfig::default(), countries, None, None);
//! form.set_origin_address(origin, true);
//! form.set_destination_address(destination, true);
//!
//! // Customs shows up for international or military shipments.
//! if form.customs_required() {
//!     let forms = form.customs_forms().to_vec();
//!     form.set_customs_forms(forms, true);
//! }
//!
//! for step in form.steps() {
//!     println!("{}: {:?} {:?}", step.kind.display_name(), step.data_state, step.display_mode);
//! }
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod address;
pub mod customs;
pub mod package;
pub mod payment;
pub mod rates;
pub mod workflow;

pub use config::{PhoneRequirement, ShippingConfig};
pub use error::ShippingError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{PhoneRequirement, ShippingConfig};
    pub use crate::error::ShippingError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Address
    pub use crate::address::{
        AddressFieldError, AddressValidationError, AddressValidationFailure, AddressValidationOutcome,
        AddressValidationSuccess, AddressValidator, AddressVerification, Country, CountryState,
        OrderAddress, ShipType, ShippingAddress,
    };

    // Customs
    pub use crate::customs::{
        customs_required, is_eu_customs_scenario, ContentsType, CustomsEligibility, CustomsForm,
        CustomsFormIssue, CustomsItem, CustomsItemDraft, CustomsItemIssue, NonDeliveryOption,
        RestrictionType,
    };

    // Package
    pub use crate::package::{
        compute_default_weight, CustomPackage, OrderLineItem, PackageAttributes, PackageCatalog,
        PackageEditor, PackageItem, PredefinedOption, PredefinedPackage, TotalWeight,
    };

    // Rates and payment
    pub use crate::payment::{AccountSettings, PaymentMethod, NO_PAYMENT_METHOD};
    pub use crate::rates::{CarrierRate, CarrierRateOffer, PackageRates, SelectedRate, SignatureOption};

    // Workflow
    pub use crate::workflow::{
        derive_steps, steps_for, DataState, DisplayMode, OrderSummary, ShippingLabelForm, Step, StepKind,
    };
}
