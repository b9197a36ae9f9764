//! MediaPlayer - the media-player view of a DeviceClient
//!
//! A thin mapping from device state to the property names an automation host
//! expects. Holds no state of its own beyond display settings.

use enigma2_api::EventInfo;

use crate::{DeviceClient, DeviceConfig, DeviceError};

/// Points added or removed by one volume step
pub const VOLUME_STEP: u8 = 5;

/// Content type reported while a channel is on screen
pub const MEDIA_CONTENT_TYPE: &str = "tvshow";

/// Power state as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    On,
    Off,
}

impl PlayerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::On => "on",
            PlayerState::Off => "off",
        }
    }
}

/// Commands the entity accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    VolumeSet,
    VolumeMute,
    VolumeStep,
    TurnOn,
    TurnOff,
}

pub const SUPPORTED_FEATURES: &[Feature] = &[
    Feature::VolumeSet,
    Feature::VolumeMute,
    Feature::TurnOff,
    Feature::VolumeStep,
    Feature::TurnOn,
];

/// Media-player entity backed by one [`DeviceClient`]
#[derive(Debug)]
pub struct MediaPlayer {
    name: String,
    use_channel_icon: bool,
    device: DeviceClient,
}

impl MediaPlayer {
    /// Build the device client from `config` and wrap it
    pub fn new(config: DeviceConfig) -> Result<Self, DeviceError> {
        let name = config.name.clone();
        let use_channel_icon = config.use_channel_icon;
        Ok(Self::from_device(name, use_channel_icon, DeviceClient::new(config)?))
    }

    pub fn from_device(name: impl Into<String>, use_channel_icon: bool, device: DeviceClient) -> Self {
        Self {
            name: name.into(),
            use_channel_icon,
            device,
        }
    }

    pub fn device(&self) -> &DeviceClient {
        &self.device
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable identifier; the box's MAC address when known
    pub fn unique_id(&self) -> Option<&str> {
        self.device.mac_address()
    }

    pub fn state(&self) -> PlayerState {
        if self.device.in_standby() {
            PlayerState::Off
        } else {
            PlayerState::On
        }
    }

    pub fn available(&self) -> bool {
        !self.device.is_offline()
    }

    /// Volume in 0.0..=1.0
    pub fn volume_level(&self) -> Option<f32> {
        self.device.volume().map(|v| f32::from(v) / 100.0)
    }

    pub fn is_volume_muted(&self) -> bool {
        self.device.muted()
    }

    pub fn media_title(&self) -> Option<&str> {
        self.device.status_info().channel_name.as_deref()
    }

    pub fn media_channel(&self) -> Option<&str> {
        self.media_title()
    }

    pub fn media_content_id(&self) -> Option<&str> {
        self.device.status_info().service_reference.as_deref()
    }

    pub fn media_content_type(&self) -> &'static str {
        MEDIA_CONTENT_TYPE
    }

    /// Channel picon or a live screen grab
    ///
    /// `None` while the box is offline or in standby.
    pub fn media_image_url(&self) -> Option<String> {
        if !self.device.state().is_active() {
            return None;
        }

        let base = self.device.base_url();
        match self.media_content_id() {
            Some(reference) if self.use_channel_icon => Some(format!(
                "{}/picon/{}.png",
                base,
                picon_name(reference)
            )),
            _ => Some(format!("{}/grab?format=jpg&r=720", base)),
        }
    }

    pub fn supported_features(&self) -> &'static [Feature] {
        SUPPORTED_FEATURES
    }

    pub fn update(&mut self) -> Result<(), DeviceError> {
        self.device.refresh()
    }

    pub fn turn_on(&mut self) -> Result<bool, DeviceError> {
        self.device.turn_on()
    }

    pub fn turn_off(&mut self) -> Result<bool, DeviceError> {
        self.device.turn_off()
    }

    /// Set volume from a host level in 0.0..=1.0
    pub fn set_volume_level(&mut self, level: f32) -> Result<bool, DeviceError> {
        let volume = (level * 100.0).round().clamp(0.0, 100.0) as u8;
        self.device.set_volume(volume)
    }

    /// Raise the volume one step
    ///
    /// Sends nothing and returns `Ok(false)` while the current volume is
    /// unknown (standby, offline, or no volume read yet).
    pub fn volume_up(&mut self) -> Result<bool, DeviceError> {
        match self.device.volume() {
            Some(current) => self
                .device
                .set_volume(current.saturating_add(VOLUME_STEP).min(100)),
            None => Ok(false),
        }
    }

    /// Lower the volume one step; see [`volume_up`](Self::volume_up)
    pub fn volume_down(&mut self) -> Result<bool, DeviceError> {
        match self.device.volume() {
            Some(current) => self.device.set_volume(current.saturating_sub(VOLUME_STEP)),
            None => Ok(false),
        }
    }

    /// Programme airing now on the current channel, fetched on demand
    pub fn media_program(&mut self) -> Result<Option<EventInfo>, DeviceError> {
        Ok(self.device.current_event()?.and_then(|info| info.now))
    }

    /// Bring the mute state to `mute`
    ///
    /// The box only knows a toggle, so nothing is sent when it is already
    /// in the requested state.
    pub fn mute_volume(&mut self, mute: bool) -> Result<bool, DeviceError> {
        if self.device.muted() == mute {
            return Ok(true);
        }
        self.device.mute_toggle()
    }
}

/// Picon file name for a service reference: `1:0:1:2:3:` -> `1_0_1_2_3`
fn picon_name(reference: &str) -> String {
    reference.trim_end_matches(':').replace(':', "_")
}
