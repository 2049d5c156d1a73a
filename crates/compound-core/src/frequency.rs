//! Human-readable names for compounding frequencies.

use crate::constants::NAMED_FREQUENCIES;

/// Return the schedule name for `n` periods per year, if it has one.
#[must_use]
pub fn frequency_label(n: f64) -> Option<&'static str> {
    NAMED_FREQUENCIES
        .iter()
        .find(|&&(periods, _)| periods == n)
        .map(|&(_, label)| label)
}
