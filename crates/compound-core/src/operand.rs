//! Raw calculator inputs that may or may not be numeric.

use std::fmt;

use crate::calculator::{self, Growth, InterestError};
use crate::constants::{
    DEFAULT_ANNUAL_RATE, DEFAULT_COMPOUNDS_PER_YEAR, DEFAULT_PRINCIPAL, DEFAULT_YEARS,
};
use crate::observer::DiagnosticObserver;

/// A single input to the evaluator, as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A numeric value.
    Number(f64),
    /// Anything that is not a number.
    Text(String),
}

impl Operand {
    /// Parse raw text. Surrounding whitespace is ignored; anything `f64`
    /// does not accept stays as `Text`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Numeric value, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Numeric value, or `InvalidInputType` naming the offending input.
    pub fn require_number(&self, name: &'static str) -> Result<f64, InterestError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => Err(InterestError::InvalidInputType {
                name,
                value: text.clone(),
            }),
        }
    }
}

/// The four formula inputs in raw form.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputs {
    pub principal: Operand,
    pub annual_rate: Operand,
    pub years: Operand,
    pub compounds_per_year: Operand,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            principal: Operand::Number(DEFAULT_PRINCIPAL),
            annual_rate: Operand::Number(DEFAULT_ANNUAL_RATE),
            years: Operand::Number(DEFAULT_YEARS),
            compounds_per_year: Operand::Number(DEFAULT_COMPOUNDS_PER_YEAR),
        }
    }
}

impl RawInputs {
    /// Parse each input from raw text.
    #[must_use]
    pub fn parse(principal: &str, annual_rate: &str, years: &str, compounds_per_year: &str) -> Self {
        Self {
            principal: Operand::parse(principal),
            annual_rate: Operand::parse(annual_rate),
            years: Operand::parse(years),
            compounds_per_year: Operand::parse(compounds_per_year),
        }
    }

    /// Evaluate, reporting failures to `observer` and returning
    /// `Growth::ZERO` in their place.
    pub fn evaluate_or_zero(&self, observer: &dyn DiagnosticObserver) -> Growth {
        calculator::evaluate_or_zero(
            &self.principal,
            &self.annual_rate,
            &self.years,
            &self.compounds_per_year,
            observer,
        )
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
