//! Bounded-probe content classifier
//!
//! Decides the likely [`ContentKind`] of a buffer by looking at no more than
//! [`PROBE_LIMIT`] bytes after an optional UTF-8 BOM. The checks run in a
//! fixed order and the first one that matches wins:
//!
//! 1. NUL byte in the window -> `Binary`
//! 2. more than `window / 10` C0 controls (tab, LF, CR excluded) -> `Binary`
//! 3. window is all JSON whitespace -> `Unknown` if that is the whole buffer, else `Text`
//! 4. dispatch on the first non-whitespace byte
//!
//! The first-byte dispatch is a guess, not validation: `t`, `f` and `n` are
//! taken as the start of `true`/`false`/`null`, so `foo` reports `Json`.

use super::types::{ContentKind, PROBE_LIMIT, UTF8_BOM};
use crate::utils::ascii::first_non_whitespace;
use crate::utils::binary::{exceeds_control_density, has_nul};

/// Classifies the buffer. Never fails and never reads past the probe window.
pub fn classify(content: &[u8]) -> ContentKind {
    let content = strip_bom(content);
    if content.is_empty() {
        return ContentKind::Unknown;
    }

    let limit = content.len().min(PROBE_LIMIT);
    let head = &content[..limit];

    if has_nul(head) || exceeds_control_density(head) {
        return ContentKind::Binary;
    }

    match first_non_whitespace(head) {
        Some(pos) => dispatch(head[pos]),
        None if limit == content.len() => ContentKind::Unknown,
        // Whitespace-only window, but more bytes follow it
        None => ContentKind::Text,
    }
}

pub fn looks_like_json(content: &[u8]) -> bool {
    classify(content) == ContentKind::Json
}

pub fn looks_like_xml_or_html(content: &[u8]) -> bool {
    classify(content) == ContentKind::XmlOrHtml
}

pub fn looks_binary(content: &[u8]) -> bool {
    classify(content) == ContentKind::Binary
}

fn strip_bom(content: &[u8]) -> &[u8] {
    content.strip_prefix(&UTF8_BOM[..]).unwrap_or(content)
}

fn dispatch(first: u8) -> ContentKind {
    match first {
        b'{' | b'[' | b'"' | b'-' | b'0'..=b'9' | b't' | b'f' | b'n' => ContentKind::Json,
        b'<' => ContentKind::XmlOrHtml,
        _ => ContentKind::Text,
    }
}
