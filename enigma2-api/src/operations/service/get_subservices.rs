//! GetSubservices operation

use serde::Deserialize;

use super::{CurrentService, ServiceXml};
use crate::xml;
use crate::{ApiError, Endpoint, WebifOperation};

/// Read the currently tuned service
///
/// The first entry of the service list is the service itself; any further
/// entries are its subservices and are ignored.
pub struct GetSubservicesOperation;

#[derive(Debug, Deserialize)]
struct ServiceListXml {
    #[serde(default)]
    e2service: Vec<ServiceXml>,
}

impl WebifOperation for GetSubservicesOperation {
    type Request = ();
    type Response = CurrentService;

    const ENDPOINT: Endpoint = Endpoint::Subservices;

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        let doc: ServiceListXml = xml::parse(body, Self::ENDPOINT.name())?;
        doc.e2service
            .into_iter()
            .next()
            .map(CurrentService::from)
            .ok_or_else(|| ApiError::ParseError("Missing e2service element in subservices response".to_string()))
    }
}
