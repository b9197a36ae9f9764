//! Current service operations
//!
//! `/web/subservices` is the cheap way to learn what the box is tuned to;
//! `/web/getcurrent` adds the now/next EPG events.

mod get_current;
mod get_subservices;

use serde::Deserialize;

pub use get_current::{CurrentServiceInfo, EventInfo, GetCurrentOperation};
pub use get_subservices::GetSubservicesOperation;

use crate::xml::non_empty;

/// The service (channel) the box is tuned to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentService {
    /// Human readable channel name, e.g. "BBC ONE"
    pub name: String,
    /// Service reference, e.g. "1:0:19:1B1D:802:2:11A0000:0:0:0:"
    pub reference: String,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceXml {
    #[serde(default)]
    e2servicereference: String,
    #[serde(default)]
    e2servicename: String,
}

impl From<ServiceXml> for CurrentService {
    fn from(raw: ServiceXml) -> Self {
        Self {
            name: raw.e2servicename.trim().to_string(),
            reference: non_empty(&raw.e2servicereference).unwrap_or_default(),
        }
    }
}
