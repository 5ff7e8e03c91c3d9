//! Fuzz target for the whole text → tree → options pipeline.
//!
//! Run with: cargo +nightly fuzz run fuzz_parse
//!
//! Exercises `optsfile::parse_str()` with arbitrary text to find panics or
//! hangs in tokenizing, tree building and collapse.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are expected for most inputs; only panics matter.
        let _ = optsfile::parse_str(s);
    }
});
