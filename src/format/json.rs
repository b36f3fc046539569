//! JSON output format for batch reports

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::core::ContentKind;
use crate::error::Result;
use crate::runner::{BatchReport, PayloadRecord};
use crate::utils::hash::HexCase;

pub struct JsonFormatter {
    first_record: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { first_record: true }
    }
}

#[derive(Serialize)]
struct RecordEntry {
    index: usize,
    len: usize,
    kind: ContentKind,
    fingerprint: String,
    duplicate_of: Option<usize>,
}

#[derive(Serialize)]
struct SummaryEntry<'a> {
    kinds: &'a std::collections::BTreeMap<ContentKind, usize>,
    total_bytes: usize,
    duplicates: usize,
}

impl ReportFormatter for JsonFormatter {
    fn write_header(&mut self, output: &mut dyn Write, payload_count: usize) -> Result<()> {
        writeln!(output, "{{")?;
        writeln!(output, "  \"payload_count\": {},", payload_count)?;
        write!(output, "  \"records\": [")?;
        Ok(())
    }

    fn write_record(
        &mut self,
        output: &mut dyn Write,
        record: &PayloadRecord,
        hex_case: HexCase,
    ) -> Result<()> {
        if !self.first_record {
            write!(output, ",")?;
        }
        self.first_record = false;

        let entry = RecordEntry {
            index: record.index,
            len: record.len,
            kind: record.kind,
            fingerprint: record.fingerprint.to_hex(hex_case),
            duplicate_of: record.duplicate_of,
        };
        write!(output, "\n    {}", serde_json::to_string(&entry)?)?;
        Ok(())
    }

    fn write_footer(&mut self, output: &mut dyn Write, report: &BatchReport) -> Result<()> {
        if !self.first_record {
            writeln!(output)?;
            write!(output, "  ")?;
        }
        writeln!(output, "],")?;

        let summary = SummaryEntry {
            kinds: &report.kind_counts,
            total_bytes: report.total_bytes,
            duplicates: report.duplicate_count,
        };
        writeln!(output, "  \"summary\": {}", serde_json::to_string(&summary)?)?;
        writeln!(output, "}}")?;
        Ok(())
    }
}
