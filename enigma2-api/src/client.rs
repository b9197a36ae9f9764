use webif_client::WebifClient;

use crate::operations::{
    AboutInfo, AboutOperation, CurrentService, CurrentServiceInfo, GetCurrentOperation,
    GetPowerStateOperation, GetSubservicesOperation, GetVolumeOperation, PowerStateCommand,
    PowerStateResponse, SetPowerStateOperation, SetVolumeOperation, SetVolumeRequest,
    ToggleMuteOperation, VolumeResponse,
};
use crate::{ApiError, Result, WebifOperation};

/// A client for executing web interface operations against one box
///
/// This client bridges the stateless operation definitions and the HTTP
/// transport. It holds no device state of its own; the caller decides what
/// an error means for the device model.
#[derive(Debug, Clone)]
pub struct Enigma2Client {
    webif: WebifClient,
}

impl Enigma2Client {
    /// Create a client on top of a configured transport
    pub fn new(webif: WebifClient) -> Self {
        Self { webif }
    }

    /// `scheme://host[:port]` of the box
    pub fn base_url(&self) -> &str {
        self.webif.base_url()
    }

    /// Absolute URL for a path below the base URL
    pub fn url_for(&self, path: &str) -> String {
        self.webif.url_for(path)
    }

    /// Execute an operation against the box
    ///
    /// The request is validated and turned into a path, sent as a GET, and
    /// the answer decoded. Non-200 answers are classified into
    /// [`ApiError::AuthenticationFailed`], [`ApiError::WebInterfaceMissing`]
    /// or [`ApiError::UnexpectedStatus`].
    ///
    /// # Example
    /// ```rust,no_run
    /// use enigma2_api::Enigma2Client;
    /// use enigma2_api::operations::{SetVolumeOperation, SetVolumeRequest};
    /// # fn demo(client: &Enigma2Client) -> enigma2_api::Result<()> {
    /// let response = client.execute::<SetVolumeOperation>(&SetVolumeRequest { volume: 25 })?;
    /// assert_eq!(response.current, 25);
    /// # Ok(())
    /// # }
    /// ```
    pub fn execute<Op: WebifOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let path = Op::build_path(request)?;

        let body = self
            .webif
            .get(&path)
            .map_err(|e| ApiError::from_webif(e, self.webif.url_for(&path)))?;

        Op::parse_response(&body)
    }

    /// Read web interface version and network identity
    pub fn about(&self) -> Result<AboutInfo> {
        self.execute::<AboutOperation>(&())
    }

    /// Query the standby flag
    pub fn power_state(&self) -> Result<PowerStateResponse> {
        self.execute::<GetPowerStateOperation>(&())
    }

    /// Send a power command
    pub fn set_power_state(&self, command: PowerStateCommand) -> Result<PowerStateResponse> {
        self.execute::<SetPowerStateOperation>(&command)
    }

    /// Read volume and mute flag
    pub fn volume(&self) -> Result<VolumeResponse> {
        self.execute::<GetVolumeOperation>(&())
    }

    /// Set the absolute volume (0-100)
    pub fn set_volume(&self, volume: u8) -> Result<VolumeResponse> {
        self.execute::<SetVolumeOperation>(&SetVolumeRequest { volume })
    }

    /// Flip the mute state
    pub fn toggle_mute(&self) -> Result<()> {
        self.execute::<ToggleMuteOperation>(&())
    }

    /// The service the box is tuned to
    pub fn current_service(&self) -> Result<CurrentService> {
        self.execute::<GetSubservicesOperation>(&())
    }

    /// The service the box is tuned to, with now/next events
    pub fn current_info(&self) -> Result<CurrentServiceInfo> {
        self.execute::<GetCurrentOperation>(&())
    }
}
