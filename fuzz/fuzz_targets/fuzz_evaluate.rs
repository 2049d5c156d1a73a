#![no_main]

use libfuzzer_sys::fuzz_target;

use compound_core::calculator::{evaluate, InterestError, InvestmentParams};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    // Four little-endian f64s: P, r, t, n
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        f64::from_le_bytes(bytes)
    };
    let params = InvestmentParams {
        principal: word(0),
        annual_rate: word(1),
        years: word(2),
        compounds_per_year: word(3),
    };

    match evaluate(&params) {
        Ok(growth) => {
            assert!(growth.final_amount.is_finite());
            assert!(growth.interest_earned.is_finite());
            assert_eq!(growth.interest_earned, growth.final_amount - params.principal);
        }
        Err(InterestError::ZeroCompoundingFrequency) => {
            assert_eq!(params.compounds_per_year, 0.0);
        }
        Err(InterestError::UnexpectedFailure(_)) => {}
        Err(err @ InterestError::InvalidInputType { .. }) => {
            panic!("numeric inputs rejected as non-numeric: {err}");
        }
    }
});
