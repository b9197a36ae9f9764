//! GetCurrent operation: current service with now/next events

use serde::Deserialize;

use super::{CurrentService, ServiceXml};
use crate::xml::{self, non_empty, parse_timestamp};
use crate::{ApiError, Endpoint, WebifOperation};

/// GetCurrent operation
pub struct GetCurrentOperation;

/// One EPG event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub title: String,
    pub description: Option<String>,
    /// Start as a unix timestamp
    pub start: Option<i64>,
    /// Duration in seconds
    pub duration: Option<i64>,
}

impl EventInfo {
    /// End as a unix timestamp
    pub fn end(&self) -> Option<i64> {
        Some(self.start? + self.duration?)
    }
}

/// Decoded `/web/getcurrent` answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentServiceInfo {
    pub service: CurrentService,
    /// Event airing now
    pub now: Option<EventInfo>,
    /// Event airing next
    pub next: Option<EventInfo>,
}

#[derive(Debug, Deserialize)]
struct CurrentXml {
    #[serde(default)]
    e2service: ServiceXml,
    #[serde(default)]
    e2eventlist: EventListXml,
}

#[derive(Debug, Default, Deserialize)]
struct EventListXml {
    #[serde(default)]
    e2event: Vec<EventXml>,
}

#[derive(Debug, Deserialize)]
struct EventXml {
    #[serde(default, alias = "e2eventname")]
    e2eventtitle: String,
    #[serde(default)]
    e2eventdescription: String,
    #[serde(default)]
    e2eventstart: String,
    #[serde(default)]
    e2eventduration: String,
}

impl EventXml {
    fn into_event(self) -> Option<EventInfo> {
        let title = non_empty(&self.e2eventtitle)?;
        Some(EventInfo {
            title,
            description: non_empty(&self.e2eventdescription),
            start: parse_timestamp(&self.e2eventstart),
            duration: parse_timestamp(&self.e2eventduration),
        })
    }
}

impl WebifOperation for GetCurrentOperation {
    type Request = ();
    type Response = CurrentServiceInfo;

    const ENDPOINT: Endpoint = Endpoint::GetCurrent;

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        let doc: CurrentXml = xml::parse(body, Self::ENDPOINT.name())?;
        let mut events = doc.e2eventlist.e2event.into_iter();

        Ok(CurrentServiceInfo {
            service: doc.e2service.into(),
            now: events.next().and_then(EventXml::into_event),
            next: events.next().and_then(EventXml::into_event),
        })
    }
}
