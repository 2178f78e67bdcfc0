//! Address module.
//!
//! Contains the shipping address value, country reference data, and
//! local/remote address validation.

mod country;
mod record;
mod validation;

pub use country::{
    destination_country_choices, find_country, origin_country_choices, Country, CountryState,
};
pub use record::{OrderAddress, ShipType, ShippingAddress};
pub use validation::{
    address_form_rows, is_phone_valid, validate_address_locally, AddressFieldError, AddressFormRow,
    AddressValidationError, AddressValidationFailure, AddressValidationOutcome,
    AddressValidationSuccess, AddressValidator, AddressVerification, ADDRESS_MISSING_MESSAGE,
    NAME_REQUIRED_MESSAGE,
};
