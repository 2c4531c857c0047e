use crate::error::ParseError;
use crate::syntax::SyntaxReader;
use crate::traits::{ComposableParser, JsonParser};
use crate::traverser::Traverser;

/// Parses `null`.
///
/// Composable only for `n` followed by `u`, so other `n`-words remain
/// available to custom parsers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullParser;

impl JsonParser for NullParser {
    type Output = ();

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<(), ParseError> {
        reader.expect_literal(traverser, "null")
    }
}

impl ComposableParser for NullParser {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        current == 'n' && next == Some('u')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tokens::test_util::parse_str;

    #[test]
    fn test_null() {
        parse_str(&NullParser, "null").unwrap();
        parse_str(&NullParser, "null, 1").unwrap();
    }

    #[test]
    fn test_not_null() {
        let err = parse_str(&NullParser, "nil").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpectedCharacter('u')));
        assert!(parse_str(&NullParser, "nul").is_err());
        assert!(parse_str(&NullParser, "Null").is_err());
    }

    #[test]
    fn test_could_parse() {
        assert!(NullParser.could_parse('n', Some('u')));
        assert!(!NullParser.could_parse('n', Some('a')));
        assert!(!NullParser.could_parse('n', None));
    }
}
