//! Method-call form of the sniffing functions.
//!
//! ```
//! use sniff::{ByteSniff, ContentKind};
//!
//! let body = br#"{"ok":true}"#;
//! assert_eq!(body.classify(), ContentKind::Json);
//! assert!(b"Accept".ascii_equals_ignore_case(b"accept"));
//! ```

use crate::core::{self, ContentKind};
use crate::utils::{ascii, hash};
use crate::utils::hash::Fingerprint;

pub trait ByteSniff {
    fn classify(&self) -> ContentKind;
    fn looks_like_json(&self) -> bool;
    fn looks_like_xml_or_html(&self) -> bool;
    fn looks_binary(&self) -> bool;
    fn contains_non_ascii(&self) -> bool;
    fn ascii_equals_ignore_case(&self, other: &[u8]) -> bool;
    fn to_hash_hex(&self, upper_case: bool) -> String;
    fn fingerprint(&self) -> Fingerprint;
}

impl ByteSniff for [u8] {
    fn classify(&self) -> ContentKind {
        core::classify(self)
    }

    fn looks_like_json(&self) -> bool {
        core::looks_like_json(self)
    }

    fn looks_like_xml_or_html(&self) -> bool {
        core::looks_like_xml_or_html(self)
    }

    fn looks_binary(&self) -> bool {
        core::looks_binary(self)
    }

    fn contains_non_ascii(&self) -> bool {
        ascii::contains_non_ascii(self)
    }

    fn ascii_equals_ignore_case(&self, other: &[u8]) -> bool {
        ascii::ascii_equals_ignore_case(self, other)
    }

    fn to_hash_hex(&self, upper_case: bool) -> String {
        hash::to_hash_hex(self, upper_case)
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}
