//! XML decoding helpers shared by the operations
//!
//! Web interface documents are small and flat. They are decoded with
//! `quick-xml`'s serde support into private raw structs, then converted into
//! the public response types.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

use crate::{ApiError, Result};

/// Parse an XML document into a deserializable type
///
/// `document` names the endpoint in the error message so a failed decode
/// says which answer was malformed.
pub fn parse<T: DeserializeOwned>(xml: &str, document: &str) -> Result<T> {
    quick_xml::de::from_str(xml)
        .map_err(|e| ApiError::ParseError(format!("Failed to parse {} response: {}", document, e)))
}

/// Interpret boolean-like text sent by the box
///
/// Different endpoints answer `true`, `True` or padded variants, so the
/// comparison is case-insensitive and ignores surrounding whitespace.
pub fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Serde adapter for boolean-like element text
pub(crate) fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_flag(&text)
        .ok_or_else(|| de::Error::custom(format!("expected true/false, got '{}'", text.trim())))
}

/// Serde adapter for a percentage such as `<e2current>37</e2current>`
pub(crate) fn percent<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let value: u8 = text
        .trim()
        .parse()
        .map_err(|_| de::Error::custom(format!("expected a volume, got '{}'", text.trim())))?;
    if value > 100 {
        return Err(de::Error::custom(format!("volume {} is above 100", value)));
    }
    Ok(value)
}

/// Optional integer such as an EPG timestamp; anything unparseable is `None`
pub(crate) fn parse_timestamp(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Trimmed text, `None` when empty or the box's `N/A` placeholder
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("n/a") || text.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_is_case_insensitive() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("  TRUE\n"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("yes"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp(" 1700000000 "), Some(1_700_000_000));
        assert_eq!(parse_timestamp("None"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(" BBC ONE "), Some("BBC ONE".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty("N/A"), None);
    }

    #[test]
    fn test_parse_reports_document_name() {
        #[derive(Debug, Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            e2required: String,
        }

        let err = parse::<Doc>("<doc></doc>", "powerstate").unwrap_err();
        match err {
            ApiError::ParseError(msg) => assert!(msg.contains("powerstate")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }
}
