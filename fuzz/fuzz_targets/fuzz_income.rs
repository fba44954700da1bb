#![no_main]

use libfuzzer_sys::fuzz_target;

use rentcalc_core::income::{affordable_rent, sanitize};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    // Derivation is total: any text yields a finite, non-negative rent.
    let rent = affordable_rent(raw);
    assert!(rent.is_finite());
    assert!(rent >= 0.0);

    // Sanitizing only ever keeps digits and dots.
    let sanitized = sanitize(raw);
    assert!(sanitized
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.'));
});
