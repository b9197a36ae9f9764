use enigma2_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Connection to the web interface failed, host configuration value missing")]
    MissingHost,

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("Failed to send wake packet: {0}")]
    Wake(String),
}

impl DeviceError {
    /// Configuration problems the host should surface instead of retrying
    pub fn is_fatal(&self) -> bool {
        match self {
            DeviceError::MissingHost => true,
            DeviceError::Api(e) => e.is_fatal(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(DeviceError::MissingHost.is_fatal());
        assert!(DeviceError::Api(ApiError::AuthenticationFailed { url: "u".into() }).is_fatal());
        assert!(!DeviceError::Api(ApiError::NetworkError("refused".into())).is_fatal());
        assert!(!DeviceError::Wake("no route".into()).is_fatal());
    }
}
