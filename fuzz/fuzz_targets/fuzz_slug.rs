#![no_main]

use libfuzzer_sys::fuzz_target;

use rentcalc_core::slug::slugify;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    let slug = slugify(name);
    assert!(!slug.chars().any(char::is_whitespace));
    assert!(!slug.chars().any(|c| c.is_ascii_uppercase()));
    // Idempotent: slugging a slug changes nothing.
    assert_eq!(slugify(&slug), slug);
});
