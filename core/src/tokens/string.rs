use crate::error::{ErrorKind, ParseError, SourceError};
use crate::syntax::{Symbol, SyntaxReader};
use crate::traits::{ComposableParser, JsonParser};
use crate::traverser::Traverser;

/// Parses a double-quoted string.
///
/// The escape character only has a meaning in front of a double quote,
/// where it is dropped and the quote becomes part of the text. Everywhere
/// else it is kept as is, so `"a\nb"` yields a backslash followed by `n`.
/// It does not escape itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringParser {
    escape: char,
}

impl StringParser {
    pub const DEFAULT: Self = Self { escape: '\\' };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_escape(escape: char) -> Self {
        Self { escape }
    }

    #[inline]
    pub const fn escape(&self) -> char {
        self.escape
    }
}

impl Default for StringParser {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl JsonParser for StringParser {
    type Output = String;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<String, ParseError> {
        reader.expect_symbol(traverser, Symbol::DoubleQuote)?;
        let mut text = String::new();
        let mut last = None;
        loop {
            if !traverser.has_next() {
                let kind = if last == Some(self.escape) {
                    ErrorKind::EscapedTerminator
                } else {
                    SourceError::Exhausted.into()
                };
                return Err(reader.error(traverser, kind));
            }
            let ch = reader.advance(traverser)?;
            if Symbol::DoubleQuote.matches(ch) {
                if last != Some(self.escape) {
                    return Ok(text);
                }
                if !traverser.has_next() {
                    return Err(reader.error(traverser, ErrorKind::EscapedTerminator));
                }
            }
            last = Some(ch);
            if ch == self.escape && traverser.peek() == Some(Symbol::DoubleQuote.literal()) {
                continue;
            }
            text.push(ch);
        }
    }
}

impl ComposableParser for StringParser {
    #[inline]
    fn could_parse(&self, current: char, _: Option<char>) -> bool {
        Symbol::DoubleQuote.matches(current)
    }
}
