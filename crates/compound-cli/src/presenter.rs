//! CLI report presenter.

use std::cell::RefCell;
use std::io::{self, Write};

use tracing::warn;

use compound_core::{frequency_label, DiagnosticObserver, Growth, InterestError, RawInputs};

use crate::output::{format_count, format_currency, format_operand, format_percent, format_quantity};

/// Trait for presenting the calculator report to the user.
pub trait ReportPresenter {
    /// Present the report title.
    fn present_header(&self) -> io::Result<()>;

    /// Present the investment details block.
    fn present_inputs(&self, inputs: &RawInputs) -> io::Result<()>;

    /// Present the results block. Nothing is shown unless the final amount
    /// is positive.
    fn present_result(&self, growth: &Growth) -> io::Result<()>;

    /// Present a recovered calculation failure.
    fn present_error(&self, error: &InterestError) -> io::Result<()>;
}

/// CLI report presenter writing to any `Write` sink (stdout in the binary).
pub struct CLIReportPresenter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> CLIReportPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Consume the presenter and return the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

impl<W: Write> ReportPresenter for CLIReportPresenter<W> {
    fn present_header(&self) -> io::Result<()> {
        self.write_lines(&["--- Compound Interest Calculator ---".to_string()])
    }

    fn present_inputs(&self, inputs: &RawInputs) -> io::Result<()> {
        let frequency = format_operand(&inputs.compounds_per_year, format_count);
        let frequency = match inputs.compounds_per_year.as_number().and_then(frequency_label) {
            Some(label) => format!("{frequency} ({label})"),
            None => frequency,
        };

        self.write_lines(&[
            String::new(),
            "Investment Details:".to_string(),
            format!(
                "  Principal (P): {}",
                format_operand(&inputs.principal, format_currency)
            ),
            format!(
                "  Annual Rate (r): {}",
                format_operand(&inputs.annual_rate, format_percent)
            ),
            format!(
                "  Time (t): {} years",
                format_operand(&inputs.years, format_quantity)
            ),
            format!("  Compounding Frequency (n): {frequency}"),
        ])
    }

    fn present_result(&self, growth: &Growth) -> io::Result<()> {
        if growth.final_amount <= 0.0 {
            return Ok(());
        }

        self.write_lines(&[
            String::new(),
            "--- Results ---".to_string(),
            format!(
                "Final Amount (A): {}",
                format_currency(growth.final_amount)
            ),
            format!(
                "Total Interest Earned: {}",
                format_currency(growth.interest_earned)
            ),
            "---------------".to_string(),
        ])
    }

    fn present_error(&self, error: &InterestError) -> io::Result<()> {
        let line = match error {
            InterestError::ZeroCompoundingFrequency => {
                "Error: Compounds per year cannot be zero.".to_string()
            }
            InterestError::InvalidInputType { .. } => {
                "Error: All inputs must be numerical values.".to_string()
            }
            InterestError::UnexpectedFailure(cause) => {
                format!("An unexpected error occurred during calculation: {cause}")
            }
        };
        self.write_lines(&[line])
    }
}

impl<W: Write> DiagnosticObserver for CLIReportPresenter<W> {
    fn on_failure(&self, error: &InterestError) {
        if let Err(e) = self.present_error(error) {
            warn!(%e, %error, "failed to write diagnostic");
        }
    }
}
