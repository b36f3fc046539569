//! Byte-level helpers used by the classifier and the batch runner
//!
//! - `ascii` - whitespace table, non-ASCII probe, case-insensitive compare
//! - `binary` - NUL and control-density signals
//! - `hash` - SHA-256 fingerprints and hex rendering
//! - `cache` - in-memory fingerprint dedup map

pub mod ascii;
pub mod binary;
pub mod cache;
pub mod hash;
