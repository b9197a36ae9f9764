//! SetPowerState operation

use super::{parse_power_state, PowerStateCommand, PowerStateResponse};
use crate::{ApiError, Endpoint, ValidationError, WebifOperation};

/// Send a power command (wake, standby, deep standby, ...)
pub struct SetPowerStateOperation;

impl WebifOperation for SetPowerStateOperation {
    type Request = PowerStateCommand;
    type Response = PowerStateResponse;

    const ENDPOINT: Endpoint = Endpoint::PowerState;

    fn build_path(request: &Self::Request) -> Result<String, ValidationError> {
        Ok(Self::ENDPOINT.with_query(&format!("newstate={}", request.code())))
    }

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        parse_power_state(body)
    }
}
