#![no_main]

use std::num::NonZeroUsize;

use arbitrary::Arbitrary;
use jsonic::{Dialect, NewlineConvention, ParseConfig, TrailingPolicy, from_str_with, parse};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    strict_keys: bool,
    trailing: bool,
    crlf: bool,
    ensure_consumed: bool,
    history: u8,
    backtrace: u8,
    depth: u8,
}

impl Input<'_> {
    fn config(&self) -> ParseConfig {
        let newline = if self.crlf {
            NewlineConvention::CrLf
        } else {
            NewlineConvention::Lf
        };
        ParseConfig::new()
            .with_newline(newline)
            .with_history_capacity(NonZeroUsize::new(usize::from(self.history)).unwrap_or(NonZeroUsize::MIN))
            .with_backtrace_limit(usize::from(self.backtrace))
            .with_max_recursion_depth(usize::from(self.depth))
            .with_ensure_consumed(self.ensure_consumed)
    }
}

fuzz_target!(|input: Input<'_>| {
    let trailing = if input.trailing {
        TrailingPolicy::Optional
    } else {
        TrailingPolicy::Forbidden
    };
    let dialect = Dialect::new()
        .with_strict_keys(input.strict_keys)
        .with_trailing(trailing)
        .build();

    match from_str_with(&dialect, input.text, input.config()) {
        Ok(value) => {
            // A string ending in a backslash does not read back.
            let printed = value.to_string();
            if !printed.contains('\\') {
                if let Ok(again) = parse(&printed) {
                    assert_eq!(again, value);
                }
            }
        }
        Err(err) => {
            assert!(err.line() >= 1);
            assert!(err.to_string().starts_with("Error at line "));
        }
    }
});
