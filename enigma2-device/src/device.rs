//! DeviceClient - the stateful polling client for one box
//!
//! The host calls [`DeviceClient::refresh`] on its own schedule. Each call
//! walks power state, then volume, then the current service, and folds the
//! answers into a [`DeviceState`]. Transient failures only flip the offline
//! flag; authentication and missing-plugin errors are returned to the caller.

use std::fmt;

use enigma2_api::{ApiError, CurrentServiceInfo, Enigma2Client, PowerStateCommand};
use tracing::{debug, error, info, warn};
use webif_client::WebifClient;

use crate::state::{DeviceState, StatusInfo};
use crate::wake::{MacAddress, MagicPacketSender, WakeSignal};
use crate::{DeviceConfig, DeviceError};

static NO_STATUS: StatusInfo = StatusInfo::EMPTY;

/// Stateful client for one Enigma2 box
///
/// Not internally synchronised: the host must not run two operations on the
/// same client at once. Every operation blocks until its HTTP requests finish
/// or hit the configured timeout.
///
/// # Example
///
/// ```rust,no_run
/// use enigma2_device::{DeviceClient, DeviceConfig};
///
/// let config = DeviceConfig::new("10.0.0.5").with_credentials("root", "dreambox");
/// let mut device = DeviceClient::new(config)?;
///
/// device.refresh()?;
/// if !device.is_offline() && !device.in_standby() {
///     println!("watching {:?} at volume {:?}", device.status_info().channel_name, device.volume());
/// }
/// # Ok::<(), enigma2_device::DeviceError>(())
/// ```
pub struct DeviceClient {
    client: Enigma2Client,
    wake: Box<dyn WakeSignal>,
    deep_standby: bool,
    mac_address: Option<String>,
    webif_version: Option<String>,
    state: DeviceState,
}

impl DeviceClient {
    /// Create a client that wakes the box with UDP magic packets
    pub fn new(config: DeviceConfig) -> Result<Self, DeviceError> {
        Self::with_wake(config, Box::new(MagicPacketSender::new()))
    }

    /// Create a client with a custom wake capability
    ///
    /// Fails with [`DeviceError::MissingHost`] before any I/O if the host is
    /// blank. Otherwise asks the box for its version and, if none was
    /// configured, its MAC address. An unreachable box still yields a usable
    /// client, marked offline.
    pub fn with_wake(config: DeviceConfig, wake: Box<dyn WakeSignal>) -> Result<Self, DeviceError> {
        if config.host.trim().is_empty() {
            error!("Missing host!");
            return Err(DeviceError::MissingHost);
        }

        debug!("Initialising new webif client for host: {}", config.host);

        let webif = WebifClient::new(config.base_url(), &config.credentials(), config.timeouts());

        let mut device = Self {
            client: Enigma2Client::new(webif),
            wake,
            deep_standby: config.deep_standby,
            mac_address: config.mac_address().map(str::to_string),
            webif_version: None,
            state: DeviceState::default(),
        };

        device.fetch_version()?;
        Ok(device)
    }

    /// `scheme://host:port` of the box
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn is_offline(&self) -> bool {
        self.state.is_offline
    }

    pub fn in_standby(&self) -> bool {
        self.state.in_standby
    }

    /// Volume 0-100; `None` while offline or in standby
    pub fn volume(&self) -> Option<u8> {
        if self.state.is_active() {
            self.state.volume
        } else {
            None
        }
    }

    /// Mute flag; always false while offline or in standby
    pub fn muted(&self) -> bool {
        self.state.is_active() && self.state.muted
    }

    /// Current channel; empty while offline or in standby
    pub fn status_info(&self) -> &StatusInfo {
        if self.state.is_active() {
            &self.state.status_info
        } else {
            &NO_STATUS
        }
    }

    /// Configured or discovered hardware address
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    /// Web interface version reported by the last successful about call
    pub fn webif_version(&self) -> Option<&str> {
        self.webif_version.as_deref()
    }

    /// Raw state as of the last refresh
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Poll the box and update the device state
    ///
    /// 1. Query power state. On failure the box is offline and all derived
    ///    state is reset.
    /// 2. In standby, reset volume, mute and status and stop here.
    /// 3. Query volume and mute.
    /// 4. Query the current service.
    ///
    /// A failure in step 3 or 4 marks the box offline and leaves the values
    /// already gathered in place until the next successful cycle.
    pub fn refresh(&mut self) -> Result<(), DeviceError> {
        debug!("Update state");

        let Some(power) = self.call(|client| client.power_state())? else {
            self.state.reset_derived();
            return Ok(());
        };
        self.state.in_standby = power.in_standby;

        if self.state.in_standby {
            debug!("Box is in standby, fallback to default state values");
            self.state.reset_media();
            return Ok(());
        }

        let Some(volume) = self.call(|client| client.volume())? else {
            return Ok(());
        };
        self.state.volume = Some(volume.current);
        self.state.muted = volume.muted;

        let Some(service) = self.call(|client| client.current_service())? else {
            return Ok(());
        };
        self.state.status_info = StatusInfo::from(service);

        Ok(())
    }

    /// Set the absolute volume (0-100)
    ///
    /// Returns `Ok(true)` once the box answered 200. Any other outcome is an
    /// error; only a transport failure marks the box offline.
    pub fn set_volume(&mut self, level: u8) -> Result<bool, DeviceError> {
        debug!("Setting volume to {}", level);

        match self.client.set_volume(level) {
            Ok(response) => {
                self.mark_online();
                self.state.volume = Some(response.current);
                self.state.muted = response.muted;
                Ok(true)
            }
            // The box accepted the command; an odd answer body does not undo it.
            Err(ApiError::ParseError(msg)) => {
                self.mark_online();
                debug!("Ignoring undecodable set volume answer: {}", msg);
                Ok(true)
            }
            Err(e) => Err(self.command_failed(e)),
        }
    }

    /// Take the box out of standby
    ///
    /// A box known to be offline first gets a wake signal, if its MAC address
    /// is known. The wake-from-standby command is sent either way.
    pub fn turn_on(&mut self) -> Result<bool, DeviceError> {
        if self.state.is_offline {
            debug!("Box is offline, going to try wake on lan");
            self.wake_signal();
        }

        debug!("Wakeup box from standby");
        self.power_command(PowerStateCommand::Wakeup)
    }

    /// Put the box into standby, or deep standby when configured
    pub fn turn_off(&mut self) -> Result<bool, DeviceError> {
        let command = if self.deep_standby {
            PowerStateCommand::DeepStandby
        } else {
            PowerStateCommand::Standby
        };

        debug!("Going into {:?}", command);
        self.power_command(command)
    }

    /// Flip the mute state
    ///
    /// `Ok(true)` on HTTP 200, `Ok(false)` for any transient failure. The
    /// answer body is not inspected.
    pub fn mute_toggle(&mut self) -> Result<bool, DeviceError> {
        debug!("Toggling mute");

        match self.client.toggle_mute() {
            Ok(()) => {
                self.mark_online();
                Ok(true)
            }
            Err(e) if e.is_fatal() => Err(self.command_failed(e)),
            Err(e) => {
                self.command_failed(e);
                Ok(false)
            }
        }
    }

    /// Send a wake-on-LAN packet to the box
    ///
    /// Returns false when no MAC address is known or sending failed.
    pub fn wake_signal(&mut self) -> bool {
        let Some(mac) = self.mac_address.as_deref() else {
            warn!("Cannot wake up host as mac_address is not known.");
            return false;
        };

        let result = mac
            .parse::<MacAddress>()
            .and_then(|mac| self.wake.send(&mac));

        match result {
            Ok(()) => {
                debug!("Sent WOL magic packet to {}", mac);
                true
            }
            Err(e) => {
                warn!("Cannot wake up host {}: {}", mac, e);
                false
            }
        }
    }

    /// Ask the box for its web interface version
    ///
    /// On success the version is stored and, when no MAC address is known
    /// yet, the box's LAN MAC is adopted. A configured or previously
    /// discovered MAC is never replaced.
    pub fn fetch_version(&mut self) -> Result<Option<String>, DeviceError> {
        let Some(about) = self.call(|client| client.about())? else {
            warn!(
                "{}: Cannot get version as box is unreachable.",
                self.client.url_for("/web/about")
            );
            return Ok(None);
        };

        info!("{}: Enigma2 Webinterface version {}", self.base_url(), about.webif_version);

        if self.mac_address.is_none() {
            if let Some(mac) = about.lan_mac {
                info!(
                    "found {} mac_address: {}",
                    about.lan_ip.as_deref().unwrap_or("box"),
                    mac
                );
                self.mac_address = Some(mac);
            }
        }

        self.webif_version = Some(about.webif_version.clone());
        Ok(Some(about.webif_version))
    }

    /// Current service with now/next EPG events, fetched on demand
    ///
    /// Not part of [`refresh`](Self::refresh); returns `None` while the box
    /// is in standby or unreachable.
    pub fn current_event(&mut self) -> Result<Option<CurrentServiceInfo>, DeviceError> {
        if self.state.in_standby && !self.state.is_offline {
            return Ok(None);
        }
        self.call(|client| client.current_info())
    }

    fn power_command(&mut self, command: PowerStateCommand) -> Result<bool, DeviceError> {
        match self.client.set_power_state(command) {
            Ok(response) => {
                self.mark_online();
                self.state.in_standby = response.in_standby;
                if response.in_standby {
                    self.state.reset_media();
                }
                Ok(true)
            }
            Err(ApiError::ParseError(msg)) => {
                self.mark_online();
                debug!("Ignoring undecodable power state answer: {}", msg);
                Ok(true)
            }
            Err(e) => Err(self.command_failed(e)),
        }
    }

    /// Run one request under the refresh failure policy
    ///
    /// `Ok(Some(_))` on success, `Ok(None)` after a transient failure (the box
    /// is now offline), `Err` for fatal configuration errors.
    fn call<T>(
        &mut self,
        request: impl FnOnce(&Enigma2Client) -> enigma2_api::Result<T>,
    ) -> Result<Option<T>, DeviceError> {
        match request(&self.client) {
            Ok(value) => {
                self.mark_online();
                Ok(Some(value))
            }
            Err(e) if e.is_fatal() => {
                error!("{}", e);
                Err(e.into())
            }
            Err(e) => {
                self.mark_offline(&e);
                Ok(None)
            }
        }
    }

    fn command_failed(&mut self, e: ApiError) -> DeviceError {
        match e {
            ApiError::NetworkError(_) => self.mark_offline(&e),
            _ if e.is_fatal() => error!("{}", e),
            _ => warn!("{}", e),
        }
        e.into()
    }

    fn mark_online(&mut self) {
        if self.state.is_offline {
            info!("{} is reachable again", self.base_url());
        }
        self.state.is_offline = false;
    }

    fn mark_offline(&mut self, e: &ApiError) {
        // Logged once per outage so a box in deep standby does not flood the log.
        if self.state.is_offline {
            debug!("{} still unreachable: {}", self.base_url(), e);
        } else {
            match e {
                ApiError::NetworkError(_) => error!(
                    "There was a connection error calling {}. Please check the network connection to the Enigma2 box. Error: {}",
                    self.base_url(),
                    e
                ),
                _ => error!("{}", e),
            }
            warn!("{} is unreachable.", self.base_url());
        }
        self.state.is_offline = true;
    }
}

impl fmt::Debug for DeviceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceClient")
            .field("base_url", &self.base_url())
            .field("mac_address", &self.mac_address)
            .field("deep_standby", &self.deep_standby)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
