#![cfg_attr(
    not(test),
    deny(
        unsafe_code,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::dbg_macro
    )
)]
//! Streaming recursive-descent parsing for JSON-like text.
//!
//! Input flows from a [`CharSource`] through a [`Traverser`], which keeps one
//! character of lookahead and reports every consumed character to a
//! [`ProcessContext`]. Token parsers pull characters through a
//! [`SyntaxReader`] and are combined into grammars with [`Compose`].

mod collect;
mod compose;
pub mod config;
mod context;
mod error;
mod source;
mod syntax;
pub mod tokens;
pub mod traits;
mod traverser;

pub use collect::KeyedCollection;
pub use compose::{Compose, Recursive};
pub use config::{NewlineConvention, ParseConfig, RecursionGuard, TrailingPolicy};
pub use context::{HistoryContext, LineContext};
pub use error::{
    BACKTRACE_PREFIX, DefaultErrorFactory, ErrorFactory, ErrorKind, ParseError, SourceError,
    render_message,
};
pub use source::{ReaderSource, StrSource};
pub use syntax::{Symbol, SyntaxReader};
pub use tokens::{ArrayParser, BooleanParser, NullParser, ObjectParser, StringParser};
pub use traits::{CharSource, ComposableParser, JsonParser, Map, ParserFn, ProcessContext, parser_fn};
pub use traverser::Traverser;
