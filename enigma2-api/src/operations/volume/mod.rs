//! Volume operations
//!
//! Volume query, absolute volume and mute toggle all live on `/web/vol`.

mod get_volume;
mod set_volume;
mod toggle_mute;

use serde::Deserialize;

pub use get_volume::GetVolumeOperation;
pub use set_volume::{SetVolumeOperation, SetVolumeRequest};
pub use toggle_mute::ToggleMuteOperation;

use crate::xml;
use crate::ApiError;

/// Highest volume the box accepts
pub const MAX_VOLUME: u8 = 100;

/// Decoded `e2volume` document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeResponse {
    /// Current volume, 0-100
    pub current: u8,
    pub muted: bool,
}

#[derive(Debug, Deserialize)]
struct VolumeXml {
    #[serde(deserialize_with = "crate::xml::percent")]
    e2current: u8,
    #[serde(deserialize_with = "crate::xml::flag")]
    e2ismuted: bool,
}

pub(crate) fn parse_volume(body: &str) -> Result<VolumeResponse, ApiError> {
    let doc: VolumeXml = xml::parse(body, "vol")?;
    Ok(VolumeResponse {
        current: doc.e2current,
        muted: doc.e2ismuted,
    })
}
