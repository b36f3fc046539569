//! Core types shared across sniff modules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum number of bytes the classifier looks at, counted after the BOM.
pub const PROBE_LIMIT: usize = 512;

/// UTF-8 byte-order mark
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Likely content type of a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Empty or whitespace-only input
    #[default]
    Unknown,
    /// Starts like a JSON value (object, array, string, number, literal)
    Json,
    /// Starts with `<`
    XmlOrHtml,
    /// Printable content that matched no structured form
    Text,
    /// NUL byte or too many control characters in the probe window
    Binary,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Unknown,
        ContentKind::Json,
        ContentKind::XmlOrHtml,
        ContentKind::Text,
        ContentKind::Binary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Unknown => "unknown",
            ContentKind::Json => "json",
            ContentKind::XmlOrHtml => "xml_or_html",
            ContentKind::Text => "text",
            ContentKind::Binary => "binary",
        }
    }

    /// True for kinds that are safe to render as text.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            ContentKind::Json | ContentKind::XmlOrHtml | ContentKind::Text
        )
    }

    /// Closest MIME type, if any.
    pub fn mime_hint(self) -> Option<&'static str> {
        match self {
            ContentKind::Unknown => None,
            ContentKind::Json => Some("application/json"),
            ContentKind::XmlOrHtml => Some("application/xml"),
            ContentKind::Text => Some("text/plain"),
            ContentKind::Binary => Some("application/octet-stream"),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown content kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.to_string().parse::<ContentKind>(), Ok(kind));
        }
        assert!("yaml".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&ContentKind::XmlOrHtml).unwrap();
        assert_eq!(json, "\"xml_or_html\"");
    }

    #[test]
    fn test_textual_kinds() {
        assert!(ContentKind::Json.is_textual());
        assert!(ContentKind::Text.is_textual());
        assert!(!ContentKind::Binary.is_textual());
        assert!(!ContentKind::Unknown.is_textual());
        assert_eq!(ContentKind::Unknown.mime_hint(), None);
        assert_eq!(ContentKind::Json.mime_hint(), Some("application/json"));
    }
}
