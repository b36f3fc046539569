//! Core module for sniff
//!
//! This module contains the content kind types and the bounded-probe classifier.

pub mod classifier;
mod types;

pub use classifier::{classify, looks_binary, looks_like_json, looks_like_xml_or_html};
pub use types::*;
