//! Typed API for the Enigma2 web interface
//!
//! This crate exposes the handful of web interface endpoints needed to drive
//! a set-top box as a media player: power state, volume, mute and the
//! currently tuned service. It uses the private `webif-client` crate for the
//! HTTP transport and decodes every XML document into a typed struct.
//!
//! ```rust,no_run
//! use enigma2_api::{Enigma2Client, PowerStateCommand};
//! use webif_client::{base_url, Credentials, Timeouts, WebifClient};
//!
//! let webif = WebifClient::new(
//!     base_url(false, "10.0.0.5", Some(80)),
//!     &Credentials::new("root", "dreambox"),
//!     Timeouts::default(),
//! );
//! let client = Enigma2Client::new(webif);
//!
//! if client.power_state()?.in_standby {
//!     client.set_power_state(PowerStateCommand::Wakeup)?;
//! }
//! client.set_volume(30)?;
//! # Ok::<(), enigma2_api::ApiError>(())
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod operation;
pub mod operations;
pub mod xml;

pub use client::Enigma2Client;
pub use endpoint::Endpoint;
pub use error::{ApiError, Result};
pub use operation::{Validate, ValidationError, WebifOperation};
pub use operations::{
    AboutInfo, CurrentService, CurrentServiceInfo, EventInfo, PowerStateCommand,
    PowerStateResponse, VolumeResponse,
};
