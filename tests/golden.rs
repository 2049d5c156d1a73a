//! Golden file integration tests.
//!
//! Reads tests/testdata/compound_golden.json and verifies the evaluator and
//! every calling route against known results.

use approx::assert_relative_eq;
use serde::Deserialize;

use compound_cli::output::format_currency;
use compound_core::calculator::{evaluate, evaluate_operands, Growth, InterestError, InvestmentParams};
use compound_core::observers::RecordingObserver;
use compound_core::operand::RawInputs;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
    failures: Vec<FailureEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounds_per_year: f64,
    final_amount: f64,
    interest_earned: f64,
    final_display: String,
    interest_display: String,
}

#[derive(Deserialize)]
struct FailureEntry {
    principal: String,
    annual_rate: String,
    years: String,
    compounds_per_year: String,
    kind: String,
}

impl GoldenEntry {
    fn params(&self) -> InvestmentParams {
        InvestmentParams {
            principal: self.principal,
            annual_rate: self.annual_rate,
            years: self.years,
            compounds_per_year: self.compounds_per_year,
        }
    }
}

impl FailureEntry {
    fn inputs(&self) -> RawInputs {
        RawInputs::parse(
            &self.principal,
            &self.annual_rate,
            &self.years,
            &self.compounds_per_year,
        )
    }

    fn matches(&self, err: &InterestError) -> bool {
        match self.kind.as_str() {
            "zero_frequency" => matches!(err, InterestError::ZeroCompoundingFrequency),
            "invalid_input" => matches!(err, InterestError::InvalidInputType { .. }),
            "unexpected" => matches!(err, InterestError::UnexpectedFailure(_)),
            other => panic!("unknown failure kind {other}"),
        }
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/compound_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_typed_evaluator() {
    let golden = load_golden_data();
    for entry in &golden.values {
        let growth = evaluate(&entry.params()).unwrap();
        assert_relative_eq!(growth.final_amount, entry.final_amount, max_relative = 1e-12);
        assert_relative_eq!(
            growth.interest_earned,
            entry.interest_earned,
            epsilon = 1e-9,
            max_relative = 1e-12
        );
    }
}

#[test]
fn golden_convenience_pair() {
    let golden = load_golden_data();
    for entry in &golden.values {
        let (final_amount, interest) = compound_core::compound_interest(
            entry.principal,
            entry.annual_rate,
            entry.years,
            entry.compounds_per_year,
        );
        assert_relative_eq!(final_amount, entry.final_amount, max_relative = 1e-12);
        assert_relative_eq!(interest, final_amount - entry.principal);
    }
}

#[test]
fn golden_raw_text_route() {
    let golden = load_golden_data();
    for entry in &golden.values {
        let inputs = RawInputs::parse(
            &entry.principal.to_string(),
            &entry.annual_rate.to_string(),
            &entry.years.to_string(),
            &entry.compounds_per_year.to_string(),
        );
        let observer = RecordingObserver::new();
        let growth = inputs.evaluate_or_zero(&observer);
        assert!(observer.failures().is_empty());
        assert_eq!(growth, evaluate(&entry.params()).unwrap());
    }
}

#[test]
fn golden_failures_typed() {
    let golden = load_golden_data();
    for entry in &golden.failures {
        let inputs = entry.inputs();
        let err = evaluate_operands(
            &inputs.principal,
            &inputs.annual_rate,
            &inputs.years,
            &inputs.compounds_per_year,
        )
        .unwrap_err();
        assert!(entry.matches(&err), "{} expected, got {err:?}", entry.kind);
    }
}

#[test]
fn golden_failures_substitute_zero() {
    let golden = load_golden_data();
    for entry in &golden.failures {
        let observer = RecordingObserver::new();
        let growth = entry.inputs().evaluate_or_zero(&observer);
        assert_eq!(growth, Growth::ZERO);
        let failures = observer.failures();
        assert_eq!(failures.len(), 1, "one diagnostic for {}", entry.kind);
        assert!(entry.matches(&failures[0]));
    }
}

#[test]
fn golden_currency_display() {
    let golden = load_golden_data();
    for entry in &golden.values {
        let growth = evaluate(&entry.params()).unwrap();
        assert_eq!(format_currency(growth.final_amount), entry.final_display);
        assert_eq!(format_currency(growth.interest_earned), entry.interest_display);
    }
}
