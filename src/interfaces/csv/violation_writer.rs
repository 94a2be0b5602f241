use crate::application::batch::ValidationReport;
use crate::domain::violation::ViolationKind;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 5] = ["request", "field", "kind", "rule", "message"];

#[derive(Serialize)]
struct ViolationRow<'a> {
    request: usize,
    field: &'a str,
    kind: ViolationKind,
    rule: &'a str,
    message: &'a str,
}

/// Writes violations as CSV, one row per violation.
///
/// The header is always written, so a fully valid batch yields a header-only
/// document.
pub struct ViolationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ViolationWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_reports(&mut self, reports: &[ValidationReport]) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for report in reports {
            for violation in &report.violations {
                self.writer.serialize(ViolationRow {
                    request: report.request,
                    field: &violation.field,
                    kind: violation.kind,
                    rule: violation.rule,
                    message: &violation.message,
                })?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::violation::Violation;

    #[test]
    fn test_write_reports() {
        let reports = vec![
            ValidationReport {
                request: 0,
                summary: String::new(),
                violations: vec![],
            },
            ValidationReport {
                request: 1,
                summary: String::new(),
                violations: vec![Violation::new(
                    "qrSize",
                    ViolationKind::Range,
                    "qr-size",
                    "QR size must be between 100 and 1000, got 99",
                )],
            },
        ];

        let mut buffer = Vec::new();
        ViolationWriter::new(&mut buffer)
            .write_reports(&reports)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "request,field,kind,rule,message\n1,qrSize,RangeViolation,qr-size,\"QR size must be between 100 and 1000, got 99\"\n"
        );
    }

    #[test]
    fn test_header_only_for_valid_batch() {
        let mut buffer = Vec::new();
        ViolationWriter::new(&mut buffer).write_reports(&[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "request,field,kind,rule,message\n");
    }
}
