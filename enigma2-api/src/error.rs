use thiserror::Error;
use webif_client::WebifError;

/// High-level API errors for web interface operations
///
/// Only [`ApiError::AuthenticationFailed`] and [`ApiError::WebInterfaceMissing`]
/// are configuration problems that retrying cannot fix. Everything else is
/// transient from the point of view of a polling caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// The box could not be reached at all: connection refused, DNS failure,
    /// timeout, or the body could not be read.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response parsing error
    ///
    /// The box answered 200 but the XML was malformed or lacked an element
    /// the operation requires.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// HTTP 401 from the box
    #[error("{url}: failed to authenticate with the web interface, check username and password")]
    AuthenticationFailed { url: String },

    /// HTTP 404 from the box
    #[error("Got a 404 from {url}, is the Enigma2 web interface plugin installed and enabled?")]
    WebInterfaceMissing { url: String },

    /// Any other non-200 status
    #[error("Got HTTP {code} from {url}")]
    UnexpectedStatus { url: String, code: u16 },

    /// Invalid parameter value
    ///
    /// Raised before any request is sent, e.g. a volume above 100.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Classify a transport error for the request sent to `url`
    pub fn from_webif(error: WebifError, url: impl Into<String>) -> Self {
        let url = url.into();
        match error {
            WebifError::Network(msg) => ApiError::NetworkError(msg),
            WebifError::Io(msg) => ApiError::NetworkError(msg),
            WebifError::Status { code: 401, .. } => ApiError::AuthenticationFailed { url },
            WebifError::Status { code: 404, .. } => ApiError::WebInterfaceMissing { url },
            WebifError::Status { code, .. } => ApiError::UnexpectedStatus { url, code },
        }
    }

    /// Configuration errors that must be surfaced to the user and not retried
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ApiError::AuthenticationFailed { .. } | ApiError::WebInterfaceMissing { .. }
        )
    }

    /// HTTP status code carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::AuthenticationFailed { .. } => Some(401),
            ApiError::WebInterfaceMissing { .. } => Some(404),
            ApiError::UnexpectedStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from ValidationError to ApiError
impl From<crate::operation::ValidationError> for ApiError {
    fn from(validation_error: crate::operation::ValidationError) -> Self {
        let crate::operation::ValidationError::RangeError { parameter, value, min, max } =
            validation_error;
        ApiError::InvalidParameter(format!(
            "Parameter '{}' value {} is out of range [{}, {}]",
            parameter, value, min, max
        ))
    }
}
