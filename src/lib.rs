pub mod config;
pub mod core;
pub mod error;
pub mod ext;
pub mod format;
pub mod runner;
pub mod utils;

// Re-export key items for convenience
pub use config::{ReportFormat, SniffConfig};
pub use crate::core::{
    ContentKind, PROBE_LIMIT, UTF8_BOM, classify, looks_binary, looks_like_json,
    looks_like_xml_or_html,
};
pub use error::{Result, SniffError};
pub use ext::ByteSniff;
pub use runner::{BatchEvent, BatchReport, PayloadRecord, run_batch, run_batch_with_events};
pub use utils::ascii::{ascii_equals_ignore_case, contains_non_ascii};
pub use utils::hash::{Fingerprint, HexCase, to_hash_hex, to_hash_hex_upper};
