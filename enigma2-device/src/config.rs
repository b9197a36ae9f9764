//! Configuration for one Enigma2 box
//!
//! The host platform hands this over after its own schema validation, usually
//! deserialised from YAML or JSON. Every field except `host` has a default.

use std::time::Duration;

use serde::Deserialize;
use webif_client::{base_url, Credentials, Timeouts};

pub const DEFAULT_NAME: &str = "Enigma2 Webinterface Media Player";
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_USERNAME: &str = "root";
pub const DEFAULT_PASSWORD: &str = "dreambox";

/// Configuration for a [`DeviceClient`](crate::DeviceClient)
///
/// Unknown keys are ignored, so older configurations carrying
/// `source_bouquet` or a display timeout still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Entity name shown by the host
    pub name: String,

    /// IP address or hostname of the box (required)
    pub host: String,

    /// Web interface port
    /// Default: 80
    pub port: u16,

    /// Default: "root"
    pub username: String,

    /// Default: "dreambox"
    pub password: String,

    /// Talk HTTPS instead of HTTP
    /// Default: false
    pub ssl: bool,

    /// Prefer the channel picon over a screen grab as media image
    /// Default: false
    pub use_channel_icon: bool,

    /// Hardware address used for wake-on-LAN; discovered from the box if unset
    pub mac_address: Option<String>,

    /// Turn off into deep standby instead of standby
    /// Default: false
    pub deep_standby: bool,

    /// Per-request transport timeout in seconds
    /// Default: 5
    pub timeout_secs: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            host: String::new(),
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            ssl: false,
            use_channel_icon: false,
            mac_address: None,
            deep_standby: false,
            timeout_secs: 5,
        }
    }
}

impl DeviceConfig {
    /// Configuration for `host` with every other field at its default
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Configuration for a box announced by network discovery
    ///
    /// Discovery reports the streaming port, which never serves the web
    /// interface, so the default port is used instead.
    pub fn from_discovery(hostname: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: hostname.into(),
            ..Self::new(host)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_channel_icon(mut self, use_channel_icon: bool) -> Self {
        self.use_channel_icon = use_channel_icon;
        self
    }

    pub fn with_mac_address(mut self, mac_address: impl Into<String>) -> Self {
        self.mac_address = Some(mac_address.into());
        self
    }

    pub fn with_deep_standby(mut self, deep_standby: bool) -> Self {
        self.deep_standby = deep_standby;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Configured MAC address; blank strings count as unset
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address
            .as_deref()
            .map(str::trim)
            .filter(|mac| !mac.is_empty())
    }

    /// `scheme://host:port` of the web interface
    pub fn base_url(&self) -> String {
        base_url(self.ssl, self.host.trim(), Some(self.port))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts::uniform(Duration::from_secs(self.timeout_secs.max(1)))
    }
}
