//! Shipping label error types.

use thiserror::Error;

/// Errors raised around the shipping label workflow.
///
/// The workflow setters themselves are total; these come from parsing
/// user input, loading configuration, and building package attributes.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// A numeric field could not be parsed.
    #[error("Invalid decimal value: {0}")]
    InvalidDecimal(String),

    /// Total package weight is empty, unparsable, or not positive.
    #[error("Invalid total weight: {0}")]
    InvalidWeight(String),

    /// No package has been selected.
    #[error("No package selected")]
    NoPackageSelected,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ShippingError {
    fn from(e: serde_json::Error) -> Self {
        ShippingError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for ShippingError {
    fn from(e: toml::de::Error) -> Self {
        ShippingError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShippingError::InvalidWeight("0.0".into()).to_string(),
            "Invalid total weight: 0.0"
        );
        assert_eq!(ShippingError::NoPackageSelected.to_string(), "No package selected");
    }

    #[test]
    fn test_from_toml_error() {
        let err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: ShippingError = err.into();
        assert!(matches!(err, ShippingError::Config(_)));
    }
}
