//! Concrete observer implementations.

use std::cell::RefCell;

use tracing::warn;

use crate::calculator::InterestError;
use crate::observer::DiagnosticObserver;

/// Observer that logs each failure at `warn` level.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticObserver for LoggingObserver {
    fn on_failure(&self, error: &InterestError) {
        warn!(%error, "calculation failed, substituting zero result");
    }
}

/// Observer that keeps every failure it is given.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    failures: RefCell<Vec<InterestError>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures received so far, oldest first.
    #[must_use]
    pub fn failures(&self) -> Vec<InterestError> {
        self.failures.borrow().clone()
    }
}

impl DiagnosticObserver for RecordingObserver {
    fn on_failure(&self, error: &InterestError) {
        self.failures.borrow_mut().push(error.clone());
    }
}

/// No-op observer.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticObserver for NoOpObserver {
    fn on_failure(&self, _error: &InterestError) {}
}
