/// The web interface endpoints this crate talks to
///
/// Each endpoint is a fixed path relative to the box's base URL. Commands are
/// expressed as query parameters on the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Box and web interface information (version, LAN address, MAC)
    About,

    /// Current service plus now/next EPG events
    GetCurrent,

    /// Volume query and volume/mute commands
    Volume,

    /// Standby query and power state commands
    PowerState,

    /// Current service and its subservices
    Subservices,
}

impl Endpoint {
    /// Get the name of this endpoint as a string
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::About => "about",
            Endpoint::GetCurrent => "getcurrent",
            Endpoint::Volume => "vol",
            Endpoint::PowerState => "powerstate",
            Endpoint::Subservices => "subservices",
        }
    }

    /// Path of this endpoint relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::About => "/web/about",
            Endpoint::GetCurrent => "/web/getcurrent",
            Endpoint::Volume => "/web/vol",
            Endpoint::PowerState => "/web/powerstate",
            Endpoint::Subservices => "/web/subservices",
        }
    }

    /// Path with a query string appended
    pub fn with_query(&self, query: &str) -> String {
        format!("{}?{}", self.path(), query)
    }
}
