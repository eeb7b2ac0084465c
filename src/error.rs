//! Error type shared by listeners, output strategies and the event replay.

use thiserror::Error;

/// Reporting errors.
///
/// Every variant is fatal for the reporting phase of a run: listeners return
/// it to the driver and never retry or log-and-continue.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO failure while writing or closing a report sink.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// An output strategy could not open the named report file.
    #[error("failed to create report output `{name}`: {source}")]
    CreateOutput {
        /// Logical file name requested from the strategy.
        name: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A record was delivered after the run-end notification closed the sink.
    #[error("report sink already closed")]
    Closed,
    /// Event could not be encoded for the run log.
    #[error("event serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
