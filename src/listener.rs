//! Test-run observer contract and listener fan-out.

use crate::error::ReportError;
use crate::outcome::{Description, TestOutcome};

/// Observer of a test run's lifecycle.
///
/// Callbacks are delivered strictly sequentially by the run driver; each one
/// completes (including any IO) before the next is delivered. An `Err` from
/// any callback is fatal for the reporting phase.
///
/// There are no default method bodies: a listener states explicitly which
/// notifications it ignores.
pub trait TestListener {
    /// Run is about to start.
    fn on_run_start(&mut self) -> Result<(), ReportError>;

    /// A test is about to start.
    fn on_test_start(&mut self, description: &Description) -> Result<(), ReportError>;

    /// A test passed.
    fn on_test_success(&mut self, outcome: &TestOutcome) -> Result<(), ReportError>;

    /// A test failed.
    fn on_test_failure(&mut self, outcome: &TestOutcome) -> Result<(), ReportError>;

    /// A test errored.
    fn on_test_error(&mut self, outcome: &TestOutcome) -> Result<(), ReportError>;

    /// A test was skipped.
    fn on_test_skipped(&mut self, outcome: &TestOutcome) -> Result<(), ReportError>;

    /// Run finished. Listeners release their resources here.
    fn on_run_end(&mut self) -> Result<(), ReportError>;
}

/// Forwards every notification to several listeners in registration order.
#[derive(Default)]
pub struct ListenerGroup {
    listeners: Vec<Box<dyn TestListener>>,
}

impl ListenerGroup {
    /// Empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn with_listener(mut self, listener: Box<dyn TestListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Register a listener in place.
    pub fn push(&mut self, listener: Box<dyn TestListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn each(
        &mut self,
        mut f: impl FnMut(&mut dyn TestListener) -> Result<(), ReportError>,
    ) -> Result<(), ReportError> {
        for listener in &mut self.listeners {
            f(listener.as_mut())?;
        }
        Ok(())
    }
}

impl TestListener for ListenerGroup {
    fn on_run_start(&mut self) -> Result<(), ReportError> {
        self.each(|l| l.on_run_start())
    }

    fn on_test_start(&mut self, description: &Description) -> Result<(), ReportError> {
        self.each(|l| l.on_test_start(description))
    }

    fn on_test_success(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.each(|l| l.on_test_success(outcome))
    }

    fn on_test_failure(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.each(|l| l.on_test_failure(outcome))
    }

    fn on_test_error(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.each(|l| l.on_test_error(outcome))
    }

    fn on_test_skipped(&mut self, outcome: &TestOutcome) -> Result<(), ReportError> {
        self.each(|l| l.on_test_skipped(outcome))
    }

    /// Every member gets its run-end call; the first failure is returned.
    fn on_run_end(&mut self) -> Result<(), ReportError> {
        let mut first_err = None;
        for listener in &mut self.listeners {
            if let Err(err) = listener.on_run_end() {
                tracing::error!(error = %err, "listener failed to finish run");
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
