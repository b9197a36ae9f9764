//! ToggleMute operation

use crate::{ApiError, Endpoint, ValidationError, WebifOperation};

/// Flip the mute state
///
/// The answer is not decoded; a 200 is all the caller needs.
pub struct ToggleMuteOperation;

impl WebifOperation for ToggleMuteOperation {
    type Request = ();
    type Response = ();

    const ENDPOINT: Endpoint = Endpoint::Volume;

    fn build_path(_request: &Self::Request) -> Result<String, ValidationError> {
        Ok(Self::ENDPOINT.with_query("set=mute"))
    }

    fn parse_response(_body: &str) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}
