//! Append-only JSONL log of run notifications and its replay driver.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::listener::TestListener;
use crate::outcome::{Description, TestOutcome};

/// One recorded run notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    /// Run started.
    RunStarted,
    /// Test started.
    TestStarted {
        /// Test identity.
        description: Description,
    },
    /// Test passed.
    TestSucceeded {
        /// Test outcome.
        outcome: TestOutcome,
    },
    /// Test failed.
    TestFailed {
        /// Test outcome.
        outcome: TestOutcome,
    },
    /// Test errored.
    TestErrored {
        /// Test outcome.
        outcome: TestOutcome,
    },
    /// Test skipped.
    TestSkipped {
        /// Test outcome.
        outcome: TestOutcome,
    },
    /// Run finished.
    RunEnded,
}

/// Counts gathered while replaying a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events delivered to the listener.
    pub events: usize,
    /// Undecodable lines skipped.
    pub malformed_lines: usize,
    /// Whether a run-end event was delivered.
    pub run_ended: bool,
}

/// Deliver one event to the matching listener callback.
pub fn dispatch(listener: &mut dyn TestListener, event: &RunEvent) -> Result<(), ReportError> {
    match event {
        RunEvent::RunStarted => listener.on_run_start(),
        RunEvent::TestStarted { description } => listener.on_test_start(description),
        RunEvent::TestSucceeded { outcome } => listener.on_test_success(outcome),
        RunEvent::TestFailed { outcome } => listener.on_test_failure(outcome),
        RunEvent::TestErrored { outcome } => listener.on_test_error(outcome),
        RunEvent::TestSkipped { outcome } => listener.on_test_skipped(outcome),
        RunEvent::RunEnded => listener.on_run_end(),
    }
}

/// Append one event as a JSONL line.
pub fn append_event(events_path: &Path, event: &RunEvent) -> Result<(), ReportError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_path)?;
    let json = serde_json::to_string(event)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(())
}

/// Replay `events.jsonl` into `listener`, in file order.
///
/// Malformed lines are skipped and counted. The first listener error aborts
/// the replay. Run end is delivered only if the log records it.
pub fn replay_events(
    events_path: &Path,
    listener: &mut dyn TestListener,
) -> Result<ReplaySummary, ReportError> {
    let file = std::fs::File::open(events_path)?;
    let reader = BufReader::new(file);
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<RunEvent>(&line) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(line = idx + 1, error = %err, "skipping malformed run event");
                summary.malformed_lines += 1;
                continue;
            }
        };

        dispatch(listener, &event)?;
        summary.events += 1;
        if event == RunEvent::RunEnded {
            summary.run_ended = true;
        }
    }

    Ok(summary)
}
