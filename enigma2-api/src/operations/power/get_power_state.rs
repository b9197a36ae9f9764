//! GetPowerState operation

use super::{parse_power_state, PowerStateResponse};
use crate::{ApiError, Endpoint, WebifOperation};

/// Query whether the box is in standby
pub struct GetPowerStateOperation;

impl WebifOperation for GetPowerStateOperation {
    type Request = ();
    type Response = PowerStateResponse;

    const ENDPOINT: Endpoint = Endpoint::PowerState;

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        parse_power_state(body)
    }
}
