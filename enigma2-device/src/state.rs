//! Observable state of one box

use enigma2_api::CurrentService;

/// What is on screen right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    /// Channel name, e.g. "BBC ONE"
    pub channel_name: Option<String>,
    /// Service reference of the channel
    pub service_reference: Option<String>,
}

impl StatusInfo {
    pub const EMPTY: StatusInfo = StatusInfo {
        channel_name: None,
        service_reference: None,
    };

    pub fn is_empty(&self) -> bool {
        self.channel_name.is_none() && self.service_reference.is_none()
    }
}

impl From<CurrentService> for StatusInfo {
    fn from(service: CurrentService) -> Self {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        Self {
            channel_name: non_empty(service.name),
            service_reference: non_empty(service.reference),
        }
    }
}

/// Everything a refresh cycle derives from the box
///
/// `volume`, `muted` and `status_info` only mean something while the box is
/// online and out of standby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    pub is_offline: bool,
    pub in_standby: bool,
    pub volume: Option<u8>,
    pub muted: bool,
    pub status_info: StatusInfo,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            is_offline: false,
            in_standby: true,
            volume: None,
            muted: false,
            status_info: StatusInfo::default(),
        }
    }
}

impl DeviceState {
    /// Reset everything derived from the box, keeping connectivity
    pub fn reset_derived(&mut self) {
        self.in_standby = true;
        self.reset_media();
    }

    /// Reset volume, mute and status
    pub fn reset_media(&mut self) {
        self.volume = None;
        self.muted = false;
        self.status_info = StatusInfo::default();
    }

    /// Online and out of standby
    pub fn is_active(&self) -> bool {
        !self.is_offline && !self.in_standby
    }
}
