//! Plain text output format for batch reports

use std::io::Write;

use super::ReportFormatter;
use crate::core::ContentKind;
use crate::error::Result;
use crate::runner::{BatchReport, PayloadRecord};
use crate::utils::hash::HexCase;

pub struct PlainFormatter;

impl ReportFormatter for PlainFormatter {
    fn write_header(&mut self, output: &mut dyn Write, payload_count: usize) -> Result<()> {
        writeln!(output, "=== PAYLOADS ({}) ===", payload_count)?;
        Ok(())
    }

    fn write_record(
        &mut self,
        output: &mut dyn Write,
        record: &PayloadRecord,
        hex_case: HexCase,
    ) -> Result<()> {
        write!(
            output,
            "#{:<5} {:<12} {:>10}  {}",
            record.index,
            record.kind,
            record.len,
            record.fingerprint.to_hex(hex_case)
        )?;
        if let Some(original) = record.duplicate_of {
            write!(output, "  (duplicate of #{})", original)?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn write_footer(&mut self, output: &mut dyn Write, report: &BatchReport) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "=== SUMMARY ===")?;
        for kind in ContentKind::ALL {
            writeln!(output, "{:<12} {}", kind, report.count(kind))?;
        }
        writeln!(output, "Total bytes: {}", report.total_bytes)?;
        writeln!(output, "Duplicates: {}", report.duplicate_count)?;
        Ok(())
    }
}
