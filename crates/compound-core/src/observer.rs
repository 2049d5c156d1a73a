//! Observer trait for recovered calculation failures.

use crate::calculator::InterestError;

/// Receives a report each time the recovering evaluator substitutes
/// `Growth::ZERO` for a failed calculation.
pub trait DiagnosticObserver {
    /// Report a failure.
    fn on_failure(&self, error: &InterestError);
}

impl<T: DiagnosticObserver + ?Sized> DiagnosticObserver for &T {
    fn on_failure(&self, error: &InterestError) {
        (**self).on_failure(error);
    }
}

/// Subject that forwards each failure to every registered observer.
#[derive(Default)]
pub struct DiagnosticSubject<'a> {
    observers: Vec<&'a dyn DiagnosticObserver>,
}

impl<'a> DiagnosticSubject<'a> {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    #[must_use]
    pub fn with(mut self, observer: &'a dyn DiagnosticObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl DiagnosticObserver for DiagnosticSubject<'_> {
    fn on_failure(&self, error: &InterestError) {
        for observer in &self.observers {
            observer.on_failure(error);
        }
    }
}
