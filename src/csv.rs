//! CSV row rendering for mutation records.
//!
//! Rows have no header and six unquoted fields:
//! `filename,class,method,line,status,killingTest`. Field text is written as
//! is, so names containing commas or line breaks produce ambiguous rows.

use crate::outcome::MutationRecord;

/// Killing-test field value for mutants no test killed.
pub const NO_KILLING_TEST: &str = "none";

/// Host platform line separator.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Host platform line separator.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Render one record as a CSV row, without line separator.
pub fn format_record(record: &MutationRecord) -> String {
    let details = &record.details;
    format!(
        "{},{},{},{},{},{}",
        details.filename,
        details.class_name,
        details.method,
        details.line_number,
        record.status,
        record.killing_test.as_deref().unwrap_or(NO_KILLING_TEST)
    )
}
