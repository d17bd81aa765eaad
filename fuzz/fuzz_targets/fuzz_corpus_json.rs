#![no_main]

use libfuzzer_sys::fuzz_target;
use lexfind::corpus::{Corpus, FieldLayout};

fuzz_target!(|data: &[u8]| {
    // Malformed input must surface as an error, never a panic
    let _ = Corpus::from_json(data, FieldLayout::default());
});
