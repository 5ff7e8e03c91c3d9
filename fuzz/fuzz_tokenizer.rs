//! Fuzz target for the line tokenizer.
//!
//! Run with: cargo +nightly fuzz run fuzz_tokenizer
//!
//! The first byte picks the space indentation width; the rest is tokenized
//! as `.of` text. Tokenizing must never panic, and every record it returns
//! must carry at least one token.

#![no_main]

use libfuzzer_sys::fuzz_target;
use optsfile::{Tokenizer, TokenizerConfig};

fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let config = TokenizerConfig::default().with_indent_width(usize::from(width % 16) + 1);
    if let Ok(records) = Tokenizer::new(&config).tokenize_str(text) {
        assert!(records.iter().all(|r| !r.tokens.is_empty()));
    }
});
