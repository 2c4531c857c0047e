//! Token parsers for the built-in productions.
//!
//! Each parser starts on the first character of its production and leaves
//! the traverser on the last one. None of them skip leading whitespace.

mod array;
mod boolean;
mod null;
mod object;
mod string;

pub use array::ArrayParser;
pub use boolean::BooleanParser;
pub use null::NullParser;
pub use object::ObjectParser;
pub use string::StringParser;

use crate::config::TrailingPolicy;
use crate::error::{ErrorKind, ParseError};
use crate::syntax::{Symbol, SyntaxReader};
use crate::traverser::Traverser;

/// Applies `policy` to a separator read directly before `closing`.
fn trailing_separator(
    policy: TrailingPolicy,
    traverser: &Traverser<'_>,
    reader: &SyntaxReader,
    closing: Symbol,
) -> Result<(), ParseError> {
    match policy {
        TrailingPolicy::Optional => Ok(()),
        TrailingPolicy::Forbidden => Err(reader.error(
            traverser,
            ErrorKind::TrailingSeparator {
                separator: Symbol::Comma,
                closing,
            },
        )),
    }
}
