//! # compound-core
//!
//! Core library for the compound interest calculator: the formula
//! `A = P(1 + r/n)^(nt)`, its typed errors, and the observers that receive
//! recovered failures.

pub mod calculator;
pub mod constants;
pub mod frequency;
pub mod observer;
pub mod observers;
pub mod operand;

// Re-exports
pub use calculator::{
    evaluate, evaluate_operands, evaluate_or_zero, Growth, InterestError, InvestmentParams,
};
pub use constants::{
    DEFAULT_ANNUAL_RATE, DEFAULT_COMPOUNDS_PER_YEAR, DEFAULT_PRINCIPAL, DEFAULT_YEARS,
};
pub use frequency::frequency_label;
pub use observer::{DiagnosticObserver, DiagnosticSubject};
pub use operand::{Operand, RawInputs};

/// Compute `(final_amount, interest_earned)` for numeric inputs.
///
/// Failures are logged and yield `(0.0, 0.0)`. Use [`evaluate`] to get the
/// error instead.
///
/// # Example
/// ```
/// let (final_amount, interest) = compound_core::compound_interest(500.0, 0.0, 5.0, 12.0);
/// assert_eq!((final_amount, interest), (500.0, 0.0));
/// assert_eq!(compound_core::compound_interest(1000.0, 0.05, 10.0, 0.0), (0.0, 0.0));
/// ```
#[must_use]
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounds_per_year: f64,
) -> (f64, f64) {
    let observer = observers::LoggingObserver::new();
    evaluate_or_zero(
        &Operand::Number(principal),
        &Operand::Number(annual_rate),
        &Operand::Number(years),
        &Operand::Number(compounds_per_year),
        &observer,
    )
    .as_pair()
}
