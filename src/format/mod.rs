//! Output format modules for batch reports

pub mod json;
pub mod plain;

use std::io::Write;

use crate::config::ReportFormat;
use crate::error::{Result, SniffError};
use crate::runner::{BatchReport, PayloadRecord};
use crate::utils::hash::HexCase;

pub trait ReportFormatter {
    fn write_header(&mut self, output: &mut dyn Write, payload_count: usize) -> Result<()>;

    fn write_record(
        &mut self,
        output: &mut dyn Write,
        record: &PayloadRecord,
        hex_case: HexCase,
    ) -> Result<()>;

    fn write_footer(&mut self, output: &mut dyn Write, report: &BatchReport) -> Result<()>;
}

pub fn create_formatter(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Json => Box::new(json::JsonFormatter::new()),
        ReportFormat::Plain => Box::new(plain::PlainFormatter),
    }
}

/// Writes the whole report through the formatter for `format`.
pub fn write_report(
    output: &mut dyn Write,
    report: &BatchReport,
    format: ReportFormat,
) -> Result<()> {
    write_with(create_formatter(format).as_mut(), output, report)
}

pub fn write_with(
    formatter: &mut dyn ReportFormatter,
    output: &mut dyn Write,
    report: &BatchReport,
) -> Result<()> {
    formatter.write_header(output, report.records.len())?;
    for record in &report.records {
        formatter.write_record(output, record, report.hex_case)?;
    }
    formatter.write_footer(output, report)?;
    Ok(())
}

pub fn render_report(report: &BatchReport, format: ReportFormat) -> Result<String> {
    render_with(create_formatter(format).as_mut(), report)
}

/// Renders into a string; output that is not UTF-8 is an error.
pub fn render_with(formatter: &mut dyn ReportFormatter, report: &BatchReport) -> Result<String> {
    let mut buf = Vec::new();
    write_with(formatter, &mut buf, report)?;
    String::from_utf8(buf).map_err(|e| SniffError::Render(e.to_string()))
}
