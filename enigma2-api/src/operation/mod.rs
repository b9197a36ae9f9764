//! Operation framework for web interface endpoints
//!
//! Every endpoint call is described by a zero-sized type implementing
//! [`WebifOperation`]: which endpoint it targets, how its request becomes a
//! path and query string, and how the XML answer is decoded.

use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// Base trait for all web interface operations
///
/// Requests are validated before any HTTP traffic happens, so an invalid
/// parameter never reaches the box.
pub trait WebifOperation {
    /// The request type for this operation
    type Request: Validate;

    /// The decoded response type for this operation
    type Response;

    /// The endpoint this operation is sent to
    const ENDPOINT: Endpoint;

    /// Build the path (with query string, if any) for the request
    ///
    /// The default sends a bare GET to the endpoint.
    fn build_path(request: &Self::Request) -> Result<String, ValidationError> {
        request.validate()?;
        Ok(Self::ENDPOINT.path().to_string())
    }

    /// Decode the XML body of a 200 response
    fn parse_response(xml: &str) -> Result<Self::Response, ApiError>;
}

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    pub fn range_error(
        parameter: &str,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Trait for request types that can be validated
pub trait Validate {
    /// Check the request before it is turned into a URL
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_display() {
        let err = ValidationError::range_error("volume", 0, 100, 101);
        assert_eq!(
            err.to_string(),
            "Parameter 'volume' value '101' is out of range (0..=100)"
        );
    }

    #[test]
    fn test_unit_request_is_always_valid() {
        assert!(().validate().is_ok());
    }
}
