//! About operation: web interface version and network identity

use serde::Deserialize;

use crate::xml::{self, non_empty};
use crate::{ApiError, Endpoint, WebifOperation};

/// About operation
pub struct AboutOperation;

/// Decoded `/web/about` answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    /// Version of the web interface plugin
    pub webif_version: String,
    /// Address of the box's LAN interface
    pub lan_ip: Option<String>,
    /// Hardware address of the box's LAN interface
    pub lan_mac: Option<String>,
    /// Box model, when reported
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AboutsXml {
    e2about: AboutXml,
}

#[derive(Debug, Deserialize)]
struct AboutXml {
    e2webifversion: String,
    #[serde(default)]
    e2lanip: String,
    #[serde(default)]
    e2lanmac: String,
    #[serde(default)]
    e2model: String,
}

impl WebifOperation for AboutOperation {
    type Request = ();
    type Response = AboutInfo;

    const ENDPOINT: Endpoint = Endpoint::About;

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        let doc: AboutsXml = xml::parse(body, Self::ENDPOINT.name())?;
        let about = doc.e2about;

        let webif_version = non_empty(&about.e2webifversion).ok_or_else(|| {
            ApiError::ParseError("Empty e2webifversion in about response".to_string())
        })?;

        Ok(AboutInfo {
            webif_version,
            lan_ip: non_empty(&about.e2lanip),
            lan_mac: non_empty(&about.e2lanmac),
            model: non_empty(&about.e2model),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_about() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<e2abouts>
  <e2about>
    <e2enigmaversion>2023-01-10</e2enigmaversion>
    <e2lanmac>00:09:34:1a:2b:3c</e2lanmac>
    <e2lanip>10.0.0.5</e2lanip>
    <e2webifversion>OWIF 1.4.9</e2webifversion>
    <e2model>dm920</e2model>
  </e2about>
</e2abouts>"#;

        let about = AboutOperation::parse_response(body).unwrap();
        assert_eq!(about.webif_version, "OWIF 1.4.9");
        assert_eq!(about.lan_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(about.lan_mac.as_deref(), Some("00:09:34:1a:2b:3c"));
        assert_eq!(about.model.as_deref(), Some("dm920"));
    }

    #[test]
    fn test_parse_about_without_network_fields() {
        let body = "<e2abouts><e2about><e2webifversion>1.0</e2webifversion></e2about></e2abouts>";

        let about = AboutOperation::parse_response(body).unwrap();
        assert_eq!(about.webif_version, "1.0");
        assert_eq!(about.lan_mac, None);
        assert_eq!(about.lan_ip, None);
    }

    #[test]
    fn test_parse_about_missing_version_fails() {
        let body = "<e2abouts><e2about><e2lanip>10.0.0.5</e2lanip></e2about></e2abouts>";
        assert!(matches!(
            AboutOperation::parse_response(body),
            Err(ApiError::ParseError(_))
        ));
    }
}
