use crate::error::{ErrorKind, ParseError};
use crate::syntax::SyntaxReader;
use crate::traits::{ComposableParser, JsonParser};
use crate::traverser::Traverser;

/// Parses `true` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanParser;

impl JsonParser for BooleanParser {
    type Output = bool;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<bool, ParseError> {
        match reader.current(traverser)? {
            't' => reader.expect_literal(traverser, "true").map(|()| true),
            'f' => reader.expect_literal(traverser, "false").map(|()| false),
            other => Err(reader.error(traverser, ErrorKind::ExpectedBoolean(other))),
        }
    }
}

impl ComposableParser for BooleanParser {
    #[inline]
    fn could_parse(&self, current: char, _: Option<char>) -> bool {
        matches!(current, 't' | 'f')
    }
}
