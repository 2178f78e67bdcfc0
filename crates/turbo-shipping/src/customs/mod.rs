//! Customs module.
//!
//! Decides when a declaration is needed, builds the per-package forms and
//! validates them.

mod eligibility;
mod eu;
mod form;
mod validation;

pub use eligibility::{customs_required, CustomsEligibility, MILITARY_STATE_CODES};
pub use eu::is_eu_customs_scenario;
pub use form::{
    regenerate_customs_forms, ContentsType, CustomsForm, CustomsItem, NonDeliveryOption, RestrictionType,
};
pub use validation::{
    customs_forms_valid, high_value_tariff_classes, is_valid_hs_tariff_number, is_valid_itn,
    validate_customs_form, validate_customs_item, CustomsFormIssue, CustomsItemDraft, CustomsItemIssue,
    ITN_REQUIRED_DESTINATIONS, ITN_VALUE_THRESHOLD,
};
