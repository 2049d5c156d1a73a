//! Default investment parameters and compounding schedule constants.

/// Default principal: $1,000.
pub const DEFAULT_PRINCIPAL: f64 = 1000.0;

/// Default annual rate: 5%.
pub const DEFAULT_ANNUAL_RATE: f64 = 0.05;

/// Default investment period in years.
pub const DEFAULT_YEARS: f64 = 10.0;

/// Default compounding frequency (quarterly).
pub const DEFAULT_COMPOUNDS_PER_YEAR: f64 = 4.0;

/// Named compounding schedules, keyed by periods per year.
pub const NAMED_FREQUENCIES: [(f64, &str); 6] = [
    (1.0, "Annually"),
    (2.0, "Semi-annually"),
    (4.0, "Quarterly"),
    (12.0, "Monthly"),
    (52.0, "Weekly"),
    (365.0, "Daily"),
];
