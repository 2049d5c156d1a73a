//! Application configuration from CLI flags and environment.

use clap::Parser;

use compound_core::RawInputs;

/// compound — compound interest calculator, A = P(1 + r/n)^(nt).
///
/// With no arguments, reports $1,000 at 5% for 10 years, compounded quarterly.
#[derive(Parser, Debug)]
#[command(name = "compound", version, about)]
pub struct AppConfig {
    /// Principal, the initial investment.
    #[arg(
        short,
        long,
        default_value = "1000.0",
        env = "COMPOUND_PRINCIPAL",
        allow_hyphen_values = true
    )]
    pub principal: String,

    /// Annual interest rate as a decimal (0.05 for 5%).
    #[arg(
        short,
        long,
        default_value = "0.05",
        env = "COMPOUND_RATE",
        allow_hyphen_values = true
    )]
    pub rate: String,

    /// Investment period in years.
    #[arg(
        short = 't',
        long,
        default_value = "10.0",
        env = "COMPOUND_YEARS",
        allow_hyphen_values = true
    )]
    pub years: String,

    /// Number of times interest is compounded per year.
    #[arg(
        short = 'n',
        long,
        default_value = "4",
        env = "COMPOUND_COMPOUNDS_PER_YEAR",
        allow_hyphen_values = true
    )]
    pub compounds_per_year: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The four formula inputs, unvalidated.
    #[must_use]
    pub fn inputs(&self) -> RawInputs {
        RawInputs::parse(
            &self.principal,
            &self.rate,
            &self.years,
            &self.compounds_per_year,
        )
    }
}
