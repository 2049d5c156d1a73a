//! The compound interest evaluator.
//!
//! `evaluate` is the typed path: it returns `InterestError` on failure.
//! `evaluate_or_zero` is the recovering path used by the driver: failures go
//! to a `DiagnosticObserver` and the result falls back to `Growth::ZERO`.

use tracing::debug;

use crate::constants::{
    DEFAULT_ANNUAL_RATE, DEFAULT_COMPOUNDS_PER_YEAR, DEFAULT_PRINCIPAL, DEFAULT_YEARS,
};
use crate::observer::DiagnosticObserver;
use crate::operand::Operand;

/// Error type for compound interest calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterestError {
    /// `r / n` with `n == 0`.
    #[error("compounds per year cannot be zero")]
    ZeroCompoundingFrequency,

    /// An input was not a number.
    #[error("{name} must be a numerical value, got {value:?}")]
    InvalidInputType {
        /// Which input was rejected.
        name: &'static str,
        /// The raw value supplied.
        value: String,
    },

    /// Any other failure, with its cause.
    #[error("unexpected failure: {0}")]
    UnexpectedFailure(String),
}

/// Final amount and interest earned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Growth {
    /// Principal plus all compounded interest.
    pub final_amount: f64,
    /// `final_amount - principal`.
    pub interest_earned: f64,
}

impl Growth {
    /// The fallback value substituted after a reported failure.
    pub const ZERO: Growth = Growth {
        final_amount: 0.0,
        interest_earned: 0.0,
    };

    /// As a `(final_amount, interest_earned)` pair.
    #[must_use]
    pub fn as_pair(self) -> (f64, f64) {
        (self.final_amount, self.interest_earned)
    }
}

/// Numeric inputs to the formula `A = P(1 + r/n)^(nt)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentParams {
    /// P, the initial investment.
    pub principal: f64,
    /// r, as a decimal fraction (0.05 for 5%).
    pub annual_rate: f64,
    /// t, in years.
    pub years: f64,
    /// n, interest applications per year.
    pub compounds_per_year: f64,
}

impl Default for InvestmentParams {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            annual_rate: DEFAULT_ANNUAL_RATE,
            years: DEFAULT_YEARS,
            compounds_per_year: DEFAULT_COMPOUNDS_PER_YEAR,
        }
    }
}

impl InvestmentParams {
    /// Convert raw operands, in the order the formula consumes them:
    /// `r` and `n` for the base, the zero check, `t` for the exponent,
    /// then `P`.
    pub fn from_operands(
        principal: &Operand,
        annual_rate: &Operand,
        years: &Operand,
        compounds_per_year: &Operand,
    ) -> Result<Self, InterestError> {
        let annual_rate = annual_rate.require_number("annual rate")?;
        let compounds_per_year = compounds_per_year.require_number("compounds per year")?;
        if compounds_per_year == 0.0 {
            return Err(InterestError::ZeroCompoundingFrequency);
        }
        let years = years.require_number("years")?;
        let principal = principal.require_number("principal")?;

        Ok(Self {
            principal,
            annual_rate,
            years,
            compounds_per_year,
        })
    }
}

/// Evaluate `A = P(1 + r/n)^(nt)` and the interest earned.
pub fn evaluate(params: &InvestmentParams) -> Result<Growth, InterestError> {
    let InvestmentParams {
        principal,
        annual_rate,
        years,
        compounds_per_year,
    } = *params;

    if compounds_per_year == 0.0 {
        return Err(InterestError::ZeroCompoundingFrequency);
    }

    let base = 1.0 + annual_rate / compounds_per_year;
    let exponent = compounds_per_year * years;
    let final_amount = principal * base.powf(exponent);
    let interest_earned = final_amount - principal;

    if !final_amount.is_finite() || !interest_earned.is_finite() {
        return Err(InterestError::UnexpectedFailure(non_finite_cause(
            params,
            base,
            exponent,
        )));
    }

    let growth = Growth {
        final_amount,
        interest_earned,
    };
    debug!(
        principal,
        annual_rate,
        years,
        compounds_per_year,
        final_amount = growth.final_amount,
        "compound interest evaluated"
    );
    Ok(growth)
}

/// Convert raw operands and evaluate.
pub fn evaluate_operands(
    principal: &Operand,
    annual_rate: &Operand,
    years: &Operand,
    compounds_per_year: &Operand,
) -> Result<Growth, InterestError> {
    let params =
        InvestmentParams::from_operands(principal, annual_rate, years, compounds_per_year)?;
    evaluate(&params)
}

/// Evaluate, reporting any failure to `observer` and returning `Growth::ZERO`
/// in its place.
pub fn evaluate_or_zero(
    principal: &Operand,
    annual_rate: &Operand,
    years: &Operand,
    compounds_per_year: &Operand,
    observer: &dyn DiagnosticObserver,
) -> Growth {
    match evaluate_operands(principal, annual_rate, years, compounds_per_year) {
        Ok(growth) => growth,
        Err(err) => {
            observer.on_failure(&err);
            Growth::ZERO
        }
    }
}

fn non_finite_cause(params: &InvestmentParams, base: f64, exponent: f64) -> String {
    let inputs = [
        ("principal", params.principal),
        ("annual rate", params.annual_rate),
        ("years", params.years),
        ("compounds per year", params.compounds_per_year),
    ];
    if let Some((name, value)) = inputs.iter().find(|(_, v)| !v.is_finite()) {
        return format!("{name} is not finite ({value})");
    }
    if base == 0.0 && exponent < 0.0 {
        return format!("0 cannot be raised to a negative power ({exponent})");
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return format!("negative base {base} raised to fractional power {exponent}");
    }
    "numerical result out of range".to_string()
}
