#![no_main]

use libfuzzer_sys::fuzz_target;

use compound_core::calculator::Growth;
use compound_core::observers::RecordingObserver;
use compound_core::operand::RawInputs;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Split into four fields on '|', padding with empty text
    let mut fields = text.splitn(4, '|');
    let mut next = || fields.next().unwrap_or("");
    let inputs = RawInputs::parse(next(), next(), next(), next());

    let observer = RecordingObserver::new();
    let growth = inputs.evaluate_or_zero(&observer);
    match observer.failures().len() {
        0 => {}
        1 => assert_eq!(growth, Growth::ZERO),
        n => panic!("{n} diagnostics for one evaluation"),
    }
});
