//! Workflow module.
//!
//! The step model, the shipping label form state machine, and the text
//! shown in the form's rows.

mod form;
mod step;
mod summary;

pub use form::ShippingLabelForm;
pub use step::{derive_steps, steps_for, DataState, DataStates, DisplayMode, Step, StepInputs, StepKind, STEP_ORDER};
pub use summary::{
    OrderSummary, OrderSummaryLine, CARRIER_AND_RATES_PLACEHOLDER, PACKAGE_DETAILS_PLACEHOLDER,
    PAYMENT_METHOD_PLACEHOLDER,
};
