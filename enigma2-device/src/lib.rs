//! # Enigma2 device client
//!
//! A polling client for the Enigma2 web interface (OpenWebif and compatible
//! plugins) and a media-player view on top of it:
//!
//! ```rust,no_run
//! use enigma2_device::{DeviceConfig, MediaPlayer};
//!
//! fn main() -> Result<(), enigma2_device::DeviceError> {
//!     let config = DeviceConfig::new("192.168.1.20").with_name("Living Room");
//!     let mut player = MediaPlayer::new(config)?;
//!
//!     player.update()?;
//!     println!("{} is {}", player.name(), player.state().as_str());
//!     if let Some(level) = player.volume_level() {
//!         println!("volume {:.2}, channel {:?}", level, player.media_channel());
//!     }
//!
//!     player.volume_up()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! MediaPlayer (host-facing properties and commands)
//!     ↓
//! DeviceClient (state, offline tracking, wake-on-LAN)
//!     ↓
//! enigma2-api (typed operations, XML decoding)
//!     ↓
//! webif-client (HTTP GET with basic auth)
//! ```
//!
//! Nothing here spawns threads or installs a log subscriber. The host drives
//! [`DeviceClient::refresh`] and sets up logging via [`logging`].

pub mod config;
pub mod device;
pub mod entity;
pub mod error;
pub mod logging;
pub mod state;
pub mod wake;

pub use config::DeviceConfig;
pub use device::DeviceClient;
pub use entity::{Feature, MediaPlayer, PlayerState, SUPPORTED_FEATURES, VOLUME_STEP};
pub use error::DeviceError;
pub use state::{DeviceState, StatusInfo};
pub use wake::{MacAddress, MagicPacketSender, WakeSignal};

pub use enigma2_api::{CurrentServiceInfo, EventInfo};
