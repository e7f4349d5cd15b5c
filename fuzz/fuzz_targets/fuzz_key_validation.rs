//! Fuzz target: API key validation.
//!
//! Arbitrary path segments must never validate unless issued, and a
//! segment of the wrong length must always be reported as such.

#![no_main]

use calc_core::{KeyStore, Validation, KEY_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(supplied) = std::str::from_utf8(data) else {
        return;
    };
    let store = KeyStore::new();
    let issued = store.issue_or_get("fuzz@example.org");

    let outcome = store.validate(supplied);
    if supplied.len() != KEY_LENGTH {
        assert_eq!(outcome, Validation::WrongLength);
    } else if supplied == issued.record.key.as_str() {
        assert_eq!(outcome, Validation::Ok);
    } else {
        assert_eq!(outcome, Validation::Unknown);
    }
});
