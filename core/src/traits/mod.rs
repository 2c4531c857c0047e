//! Core traits for the jsonic parsing framework.
//!
//! # Trait Hierarchy
//!
//! ```text
//! CharSource (raw characters)
//!     └── wrapped by Traverser, which reports to a ProcessContext
//!
//! ProcessContext (line/column tracking)
//!     └── backtrace() answered by HistoryContext
//!
//! JsonParser (one grammar production)
//!     └── ComposableParser (lookahead predicate for dispatch)
//! ```
//!
//! # Usage Patterns
//!
//! ```ignore
//! use jsonic_core::{Compose, JsonParser, StringParser, BooleanParser};
//!
//! let scalar = Compose::new()
//!     .with(StringParser::DEFAULT.map(Scalar::Text))
//!     .with(BooleanParser.map(Scalar::Flag));
//! let value = scalar.parse(&mut traverser, &reader)?;
//! ```

mod context;
mod parse;
mod peek;
mod source;

pub use context::ProcessContext;
pub use parse::{JsonParser, Map, ParserFn, parser_fn};
pub use peek::ComposableParser;
pub use source::CharSource;
