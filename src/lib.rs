//! # mutation-csv-report
//!
//! `mutation-csv-report` turns the lifecycle of a mutation-testing run into a
//! flat CSV record, one row per analysed mutation:
//! - `listener`: the [`TestListener`] observer contract and [`ListenerGroup`] fan-out
//! - `csv_listener`: [`CsvReportListener`], the CSV result recorder
//! - `outcome`: test outcomes and the mutation data attached to them
//! - `output`: output-location strategies that open report sinks
//! - `events`: JSONL run-event log and replay driver
//!
//! Rows are written unquoted: names containing commas or line breaks yield
//! ambiguous rows.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod collaborators;
pub mod config;
pub mod csv;
pub mod csv_listener;
pub mod error;
pub mod events;
pub mod listener;
pub mod outcome;
pub mod output;

pub use collaborators::{CoverageDatabase, NoCoverage, SourceLocator};
pub use config::ReportConfig;
pub use csv::{LINE_SEPARATOR, NO_KILLING_TEST, format_record};
pub use csv_listener::{CsvReportListener, MUTATIONS_CSV};
pub use error::ReportError;
pub use events::{ReplaySummary, RunEvent, append_event, dispatch, replay_events};
pub use listener::{ListenerGroup, TestListener};
pub use outcome::{
    Description, DetectionStatus, MutationDetails, MutationMetadata, MutationRecord, TestOutcome,
};
pub use output::{DirectoryOutputStrategy, ResultOutputStrategy};
