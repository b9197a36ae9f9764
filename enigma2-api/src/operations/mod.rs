//! Web interface operations organized by endpoint group
//!
//! This module contains the individual operations, grouped by what they
//! control on the box.

pub mod power;
pub mod service;
pub mod system;
pub mod volume;

// Re-export commonly used operations and response types
pub use power::{
    GetPowerStateOperation, PowerStateCommand, PowerStateResponse, SetPowerStateOperation,
};
pub use service::{
    CurrentService, CurrentServiceInfo, EventInfo, GetCurrentOperation, GetSubservicesOperation,
};
pub use system::{AboutInfo, AboutOperation};
pub use volume::{
    GetVolumeOperation, SetVolumeOperation, SetVolumeRequest, ToggleMuteOperation, VolumeResponse,
};
