//! Power state operations
//!
//! The same endpoint answers standby queries and accepts power commands.

mod get_power_state;
mod set_power_state;

use serde::Deserialize;

pub use get_power_state::GetPowerStateOperation;
pub use set_power_state::SetPowerStateOperation;

use crate::xml;
use crate::{ApiError, Validate};

/// Command codes accepted by `/web/powerstate?newstate=<code>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerStateCommand {
    /// Toggle between standby and running
    ToggleStandby,
    /// Deep standby; the web interface is gone until the box is woken
    DeepStandby,
    /// Reboot the box
    Reboot,
    /// Restart the Enigma2 GUI process only
    RestartEnigma,
    /// Leave standby
    Wakeup,
    /// Enter standby
    Standby,
}

impl PowerStateCommand {
    /// Numeric code sent on the wire
    pub fn code(&self) -> u8 {
        match self {
            PowerStateCommand::ToggleStandby => 0,
            PowerStateCommand::DeepStandby => 1,
            PowerStateCommand::Reboot => 2,
            PowerStateCommand::RestartEnigma => 3,
            PowerStateCommand::Wakeup => 4,
            PowerStateCommand::Standby => 5,
        }
    }
}

impl Validate for PowerStateCommand {}

/// Decoded `e2powerstate` document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerStateResponse {
    pub in_standby: bool,
}

#[derive(Debug, Deserialize)]
struct PowerStateXml {
    #[serde(deserialize_with = "crate::xml::flag")]
    e2instandby: bool,
}

pub(crate) fn parse_power_state(body: &str) -> Result<PowerStateResponse, ApiError> {
    let doc: PowerStateXml = xml::parse(body, "powerstate")?;
    Ok(PowerStateResponse {
        in_standby: doc.e2instandby,
    })
}
