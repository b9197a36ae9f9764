//! GetVolume operation

use super::{parse_volume, VolumeResponse};
use crate::{ApiError, Endpoint, WebifOperation};

/// GetVolume operation
pub struct GetVolumeOperation;

impl WebifOperation for GetVolumeOperation {
    type Request = ();
    type Response = VolumeResponse;

    const ENDPOINT: Endpoint = Endpoint::Volume;

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        parse_volume(body)
    }
}
