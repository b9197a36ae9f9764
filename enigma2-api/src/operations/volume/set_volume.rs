//! SetVolume operation

use super::{parse_volume, VolumeResponse, MAX_VOLUME};
use crate::{ApiError, Endpoint, Validate, ValidationError, WebifOperation};

/// SetVolume operation
pub struct SetVolumeOperation;

/// Request for SetVolume operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetVolumeRequest {
    pub volume: u8,
}

impl Validate for SetVolumeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.volume > MAX_VOLUME {
            return Err(ValidationError::range_error("volume", 0, MAX_VOLUME, self.volume));
        }
        Ok(())
    }
}

impl WebifOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = VolumeResponse;

    const ENDPOINT: Endpoint = Endpoint::Volume;

    fn build_path(request: &Self::Request) -> Result<String, ValidationError> {
        request.validate()?;
        Ok(Self::ENDPOINT.with_query(&format!("set=set{}", request.volume)))
    }

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        parse_volume(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_path_bounds() {
        assert_eq!(
            SetVolumeOperation::build_path(&SetVolumeRequest { volume: 0 }).unwrap(),
            "/web/vol?set=set0"
        );
        assert_eq!(
            SetVolumeOperation::build_path(&SetVolumeRequest { volume: 100 }).unwrap(),
            "/web/vol?set=set100"
        );
    }

    #[test]
    fn test_build_path_rejects_above_max() {
        let err = SetVolumeOperation::build_path(&SetVolumeRequest { volume: 101 }).unwrap_err();
        assert!(matches!(err, ValidationError::RangeError { .. }));
    }

    proptest! {
        #[test]
        fn prop_query_encodes_exact_volume(volume in 0u8..=100) {
            let path = SetVolumeOperation::build_path(&SetVolumeRequest { volume }).unwrap();
            let encoded = path.strip_prefix("/web/vol?set=set").unwrap();
            prop_assert_eq!(encoded.parse::<u8>().unwrap(), volume);
        }

        #[test]
        fn prop_rejects_everything_above_max(volume in 101u8..=255) {
            let result = SetVolumeOperation::build_path(&SetVolumeRequest { volume });
            prop_assert!(result.is_err());
        }
    }
}
