#![no_main]

use jsonic::{ParseConfig, default_dialect, from_reader, from_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let dialect = default_dialect();
    let streamed = from_reader(&dialect, data, ParseConfig::DEFAULT);

    // Valid UTF-8 must parse the same way from a string and from bytes.
    if let Ok(text) = std::str::from_utf8(data) {
        let direct = from_str(&dialect, text);
        match (streamed, direct) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("reader and str disagree: {a:?} vs {b:?}"),
        }
    }
});
