//! Listener writing one CSV row per analysed mutation.

use std::io::Write;

use crate::collaborators::{CoverageDatabase, SourceLocator};
use crate::csv::{LINE_SEPARATOR, format_record};
use crate::error::ReportError;
use crate::listener::TestListener;
use crate::outcome::{Description, TestOutcome};
use crate::output::ResultOutputStrategy;

/// Report file name requested from output strategies.
pub const MUTATIONS_CSV: &str = "mutations.csv";

/// Writes the mutation records carried by test outcomes to a CSV sink.
///
/// The listener owns its sink from construction until [`TestListener::on_run_end`],
/// which flushes and releases it exactly once. A driver that never delivers
/// run end leaves the sink unchecked; the listener only warns when dropped in
/// that state.
///
/// Run end reports flush errors only. Dropping the sink afterwards is what
/// closes it, and std `File` discards errors from the underlying close, so a
/// failure that surfaces only at close time on a file-backed sink goes
/// unreported.
pub struct CsvReportListener<W: Write> {
    out: Option<W>,
    rows_written: u64,
}

impl<W: Write> CsvReportListener<W> {
    /// Listener taking ownership of an already opened sink.
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            rows_written: 0,
        }
    }

    /// Rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// True once run end has released the sink.
    pub fn is_closed(&self) -> bool {
        self.out.is_none()
    }

    fn write_result(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        let Some(metadata) = &outcome.mutation_metadata else {
            return Ok(());
        };
        let out = self.out.as_mut().ok_or(ReportError::Closed)?;

        for mutation in &metadata.mutations {
            let mut line = format_record(mutation);
            line.push_str(LINE_SEPARATOR);
            out.write_all(line.as_bytes())?;
            self.rows_written += 1;
        }

        tracing::debug!(
            test = %outcome.description.name,
            rows = metadata.mutations.len(),
            "wrote mutation rows"
        );
        Ok(())
    }
}

impl CsvReportListener<Box<dyn Write>> {
    /// Listener writing [`MUTATIONS_CSV`] through `strategy`.
    ///
    /// Coverage, start time and locators are accepted so every report format
    /// can be built from the same arguments; this format does not use them.
    pub fn from_strategy(
        _coverage: &dyn CoverageDatabase,
        start_time_ms: i64,
        strategy: &dyn ResultOutputStrategy,
        locators: &[Box<dyn SourceLocator>],
    ) -> Result<Self, ReportError> {
        tracing::debug!(
            start_time_ms,
            locators = locators.len(),
            file = MUTATIONS_CSV,
            "creating csv report listener"
        );
        let out = strategy.create_writer_for_file(MUTATIONS_CSV)?;
        Ok(Self::new(out))
    }
}

impl<W: Write> TestListener for CsvReportListener<W> {
    fn on_run_start(&mut self) -> Result<(), ReportError> {
        Ok(())
    }

    fn on_test_start(&mut self, _description: &Description) -> Result<(), ReportError> {
        Ok(())
    }

    fn on_test_success(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.write_result(outcome)
    }

    fn on_test_failure(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.write_result(outcome)
    }

    fn on_test_error(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.write_result(outcome)
    }

    // Skipped tests carry no mutation results.
    fn on_test_skipped(&mut self, _outcome: &TestOutcome) -> Result<(), ReportError> {
        Ok(())
    }

    /// Flush, then drop the sink. Close-time errors of the dropped sink are
    /// not observable through `Write` and are not reported.
    fn on_run_end(&mut self) -> Result<(), ReportError> {
        let Some(mut out) = self.out.take() else {
            return Ok(());
        };
        out.flush()?;
        drop(out);
        tracing::info!(rows = self.rows_written, "closed mutation csv report");
        Ok(())
    }
}

impl<W: Write> Drop for CsvReportListener<W> {
    fn drop(&mut self) {
        if self.out.is_some() {
            tracing::warn!(
                rows = self.rows_written,
                "csv report listener dropped before run end; report not closed, write errors on drop are not reported"
            );
        }
    }
}
