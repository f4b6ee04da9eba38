#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must parse to some (possibly empty) document, never panic
    let document = match msl::document::MslDocument::from_reader(Cursor::new(data)) {
        Ok(document) => document,
        Err(_) => return,
    };

    for record in &document {
        let _ = record.cas_number();
        let _ = record.base_peak();
    }
    let _ = document.summary();

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = msl::extractor::extract_peaks(text);
    }
});
