//! Address validation: local field checks and the remote validation boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::country::{find_country, Country};
use super::record::{ShipType, ShippingAddress};

/// General error reported when an address has no name.
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";

/// General error reported when there is no address to validate.
pub const ADDRESS_MISSING_MESSAGE: &str = "Address is required";

/// A field-level problem found without contacting the validation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFieldError {
    Name,
    Address,
    City,
    Postcode,
    State,
    Country,
    MissingPhoneNumber,
    InvalidPhoneNumber,
}

impl AddressFieldError {
    pub fn message(&self) -> &'static str {
        match self {
            AddressFieldError::Name => "Name is required",
            AddressFieldError::Address => "Address is required",
            AddressFieldError::City => "City is required",
            AddressFieldError::Postcode => "Postcode is required",
            AddressFieldError::State => "State is required",
            AddressFieldError::Country => "Country is required",
            AddressFieldError::MissingPhoneNumber => "A phone number is required",
            AddressFieldError::InvalidPhoneNumber => "Invalid phone number",
        }
    }
}

/// Validate an address without any network call.
///
/// `countries` decides whether a state is required; `phone_required` is set
/// when the carrier needs a phone for this shipment.
pub fn validate_address_locally(
    address: &ShippingAddress,
    countries: &[Country],
    phone_required: bool,
) -> Vec<AddressFieldError> {
    let mut errors = Vec::new();

    // A company name stands in for the contact name.
    if address.name.trim().is_empty() && address.company.trim().is_empty() {
        errors.push(AddressFieldError::Name);
    }
    if address.address1.trim().is_empty() {
        errors.push(AddressFieldError::Address);
    }
    if address.city.trim().is_empty() {
        errors.push(AddressFieldError::City);
    }
    if address.postcode.trim().is_empty() {
        errors.push(AddressFieldError::Postcode);
    }
    let state_required = find_country(countries, &address.country)
        .map(Country::requires_state)
        .unwrap_or(false);
    if address.state.trim().is_empty() && state_required {
        errors.push(AddressFieldError::State);
    }
    if address.country.trim().is_empty() {
        errors.push(AddressFieldError::Country);
    }
    if phone_required {
        if !address.has_phone() {
            errors.push(AddressFieldError::MissingPhoneNumber);
        } else if !is_phone_valid(address) {
            errors.push(AddressFieldError::InvalidPhoneNumber);
        }
    }

    errors
}

/// Phone check used when a phone is required.
///
/// US numbers need 10 digits, or 11 with a leading `1` country code.
/// Separators are ignored. Any non-empty phone is accepted elsewhere.
pub fn is_phone_valid(address: &ShippingAddress) -> bool {
    if !address.has_phone() {
        return false;
    }
    if !address.is_us() {
        return true;
    }
    let digits: String = address.phone.chars().filter(char::is_ascii_digit).collect();
    if digits.starts_with('1') {
        digits.len() == 11
    } else {
        digits.len() == 10
    }
}

/// Rows of the address form, with error rows placed after the field they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormRow {
    Name,
    Company,
    Phone,
    Address,
    Address2,
    City,
    Postcode,
    State,
    Country,
    FieldError(AddressFieldError),
}

/// Lay out the address form rows for the given local and remote errors.
///
/// A remote address-field error shows under the address line. A missing
/// phone takes precedence over an invalid one.
pub fn address_form_rows(
    local_errors: &[AddressFieldError],
    remote_error: Option<&AddressValidationError>,
) -> Vec<AddressFormRow> {
    let has = |error: AddressFieldError| local_errors.contains(&error);
    let mut rows = Vec::with_capacity(16);

    rows.push(AddressFormRow::Name);
    if has(AddressFieldError::Name) {
        rows.push(AddressFormRow::FieldError(AddressFieldError::Name));
    }
    rows.push(AddressFormRow::Company);
    rows.push(AddressFormRow::Phone);
    if has(AddressFieldError::MissingPhoneNumber) {
        rows.push(AddressFormRow::FieldError(AddressFieldError::MissingPhoneNumber));
    } else if has(AddressFieldError::InvalidPhoneNumber) {
        rows.push(AddressFormRow::FieldError(AddressFieldError::InvalidPhoneNumber));
    }
    rows.push(AddressFormRow::Address);
    let remote_address_error = remote_error.is_some_and(|e| e.address_error.is_some());
    if remote_address_error || has(AddressFieldError::Address) {
        rows.push(AddressFormRow::FieldError(AddressFieldError::Address));
    }
    rows.push(AddressFormRow::Address2);
    for (row, error) in [
        (AddressFormRow::City, AddressFieldError::City),
        (AddressFormRow::Postcode, AddressFieldError::Postcode),
        (AddressFormRow::State, AddressFieldError::State),
        (AddressFormRow::Country, AddressFieldError::Country),
    ] {
        rows.push(row);
        if has(error) {
            rows.push(AddressFormRow::FieldError(error));
        }
    }

    rows
}

/// Errors returned by the address validation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", self.message())]
pub struct AddressValidationError {
    /// Problem with the street address, shown inline under the field.
    pub address_error: Option<String>,
    /// Problem with the whole address, shown as a banner.
    pub general_error: Option<String>,
}

impl AddressValidationError {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            address_error: None,
            general_error: Some(message.into()),
        }
    }

    pub fn address(message: impl Into<String>) -> Self {
        Self {
            address_error: Some(message.into()),
            general_error: None,
        }
    }

    /// Whether the form should show a top banner.
    pub fn has_banner(&self) -> bool {
        self.general_error.is_some()
    }

    /// The banner message, else the street address message.
    pub fn message(&self) -> &str {
        self.general_error
            .as_deref()
            .or(self.address_error.as_deref())
            .unwrap_or("address validation failed")
    }
}

/// Request sent to the validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressVerification {
    pub address: ShippingAddress,
    pub ship_type: ShipType,
}

/// Successful validation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressValidationSuccess {
    /// True when the normalized address only differs in formatting.
    pub is_trivial_normalization: bool,
    /// Address as normalized by the service.
    pub address: ShippingAddress,
}

/// Failed validation response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressValidationFailure {
    /// The service rejected the address.
    #[error(transparent)]
    Invalid(AddressValidationError),
    /// Transport or server failure.
    #[error("{0}")]
    Other(String),
}

/// External address validation service.
#[async_trait]
pub trait AddressValidator: Send + Sync {
    async fn validate(
        &self,
        request: AddressVerification,
    ) -> Result<AddressValidationSuccess, AddressValidationFailure>;
}

/// Outcome surfaced to the caller of `validate_address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressValidationOutcome {
    /// Accepted as entered.
    Validated(AddressValidationSuccess),
    /// Accepted, but the service suggests a different form of the address.
    SuggestedAddress(AddressValidationSuccess),
    /// Rejected, with field or general errors.
    ValidationError(AddressValidationError),
    /// The validation could not be performed.
    GenericError(String),
}

impl AddressValidationOutcome {
    /// Outcome for an address with no name, produced without a network call.
    pub fn name_required() -> Self {
        AddressValidationOutcome::ValidationError(AddressValidationError::general(NAME_REQUIRED_MESSAGE))
    }

    pub fn address_missing() -> Self {
        AddressValidationOutcome::ValidationError(AddressValidationError::general(ADDRESS_MISSING_MESSAGE))
    }

    pub fn from_result(result: Result<AddressValidationSuccess, AddressValidationFailure>) -> Self {
        match result {
            Ok(success) if success.is_trivial_normalization => AddressValidationOutcome::Validated(success),
            Ok(success) => AddressValidationOutcome::SuggestedAddress(success),
            Err(AddressValidationFailure::Invalid(error)) => AddressValidationOutcome::ValidationError(error),
            Err(AddressValidationFailure::Other(message)) => AddressValidationOutcome::GenericError(message),
        }
    }

    pub fn is_validated(&self) -> bool {
        matches!(self, AddressValidationOutcome::Validated(_))
    }
}
