use std::fmt;
use std::marker::PhantomData;

use super::trailing_separator;
use crate::config::TrailingPolicy;
use crate::error::ParseError;
use crate::syntax::{Symbol, SyntaxReader};
use crate::traits::{ComposableParser, JsonParser};
use crate::traverser::Traverser;

/// Parses `[e1, e2, ...]` into any `Default + Extend` collection.
///
/// Elements are parsed by `P` and may be surrounded by whitespace. The
/// collection type decides what happens to repeated elements, so a
/// `BTreeSet` target makes this a set parser.
///
/// # Example
///
/// ```ignore
/// let list = ArrayParser::new(StringParser::DEFAULT);
/// let set = ArrayParser::<_, BTreeSet<String>>::with_collection(StringParser::DEFAULT);
/// ```
pub struct ArrayParser<P, C> {
    element: P,
    trailing: TrailingPolicy,
    collection: PhantomData<fn() -> C>,
}

impl<P: JsonParser> ArrayParser<P, Vec<P::Output>> {
    /// Creates a parser collecting into a `Vec`.
    #[inline]
    pub fn new(element: P) -> Self {
        Self::with_collection(element)
    }
}

impl<P, C> ArrayParser<P, C> {
    #[inline]
    pub fn with_collection(element: P) -> Self {
        Self {
            element,
            trailing: TrailingPolicy::Forbidden,
            collection: PhantomData,
        }
    }

    #[inline]
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    #[inline]
    pub fn trailing(&self) -> TrailingPolicy {
        self.trailing
    }

    #[inline]
    pub fn element(&self) -> &P {
        &self.element
    }
}

impl<P, C> ArrayParser<P, C>
where
    P: JsonParser,
    C: Default + Extend<P::Output>,
{
    fn parse_elements(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<C, ParseError> {
        let mut collection = C::default();
        let mut first = true;
        loop {
            if Symbol::SquareClose.matches(reader.skip_whitespace(traverser)?) {
                return Ok(collection);
            }
            if !first {
                reader.expect_symbol(traverser, Symbol::Comma)?;
                if Symbol::SquareClose.matches(reader.skip_whitespace(traverser)?) {
                    return trailing_separator(self.trailing, traverser, reader, Symbol::SquareClose)
                        .map(|()| collection);
                }
            }
            let element = self.element.parse(traverser, reader)?;
            collection.extend(Some(element));
            first = false;
        }
    }
}

impl<P, C> JsonParser for ArrayParser<P, C>
where
    P: JsonParser,
    C: Default + Extend<P::Output>,
{
    type Output = C;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<C, ParseError> {
        reader.expect_symbol(traverser, Symbol::SquareOpen)?;
        reader.enter_nested(traverser)?;
        let result = self.parse_elements(traverser, reader);
        traverser.exit_nested();
        result
    }
}

impl<P, C> ComposableParser for ArrayParser<P, C>
where
    P: JsonParser,
    C: Default + Extend<P::Output>,
{
    #[inline]
    fn could_parse(&self, current: char, _: Option<char>) -> bool {
        Symbol::SquareOpen.matches(current)
    }
}

impl<P: Clone, C> Clone for ArrayParser<P, C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            trailing: self.trailing,
            collection: PhantomData,
        }
    }
}

impl<P: fmt::Debug, C> fmt::Debug for ArrayParser<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayParser")
            .field("element", &self.element)
            .field("trailing", &self.trailing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::error::ErrorKind;
    use crate::tokens::test_util::{parse_str, parse_with};
    use crate::tokens::{BooleanParser, StringParser};
    use crate::traits::parser_fn;

    fn words() -> impl JsonParser<Output = String> {
        parser_fn(|traverser: &mut Traverser<'_>, reader: &SyntaxReader| {
            reader.accumulate_while(traverser, |_, ch| ch.is_ascii_lowercase())
        })
    }

    #[test]
    fn test_word_arrays() {
        let parser = ArrayParser::new(words());
        assert_eq!(parse_str(&parser, "[]").unwrap(), Vec::<String>::new());
        assert_eq!(parse_str(&parser, "[ \n ]").unwrap(), Vec::<String>::new());
        assert_eq!(parse_str(&parser, "[foo]").unwrap(), vec!["foo"]);
        assert_eq!(parse_str(&parser, "[foo, bar]").unwrap(), vec!["foo", "bar"]);
        assert_eq!(parse_str(&parser, "[ foo ,\tbar\n]").unwrap(), vec!["foo", "bar"]);
    }

    #[test]
    fn test_syntax_errors() {
        let parser = ArrayParser::new(words());
        for input in ["[foo", "foo]", " [foo]", "[foo bar]", "[foo, bar", "foo, bar]"] {
            assert!(parse_str(&parser, input).is_err(), "{input}");
        }
    }

    #[test]
    fn test_missing_comma_names_symbol() {
        let parser = ArrayParser::new(words());
        let err = parse_str(&parser, "[foo bar]").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpectedSymbol(Symbol::Comma)));
    }

    #[test]
    fn test_trailing_separator_forbidden_by_default() {
        let parser = ArrayParser::new(words());
        let err = parse_str(&parser, "[foo, bar,]").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::TrailingSeparator {
                separator: Symbol::Comma,
                closing: Symbol::SquareClose
            }
        ));
    }

    #[test]
    fn test_trailing_separator_optional() {
        let parser = ArrayParser::new(words()).with_trailing(TrailingPolicy::Optional);
        assert_eq!(parse_str(&parser, "[foo, bar, ]").unwrap(), vec!["foo", "bar"]);
        assert_eq!(parse_str(&parser, "[foo,]").unwrap(), vec!["foo"]);
    }

    #[test]
    fn test_string_elements() {
        let parser = ArrayParser::new(StringParser::DEFAULT);
        assert_eq!(
            parse_str(&parser, r#"["a, b", "c]"]"#).unwrap(),
            vec!["a, b", "c]"]
        );
    }

    #[test]
    fn test_set_collection() {
        let parser = ArrayParser::<_, BTreeSet<bool>>::with_collection(BooleanParser);
        let set = parse_str(&parser, "[true, false, true]").unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![false, true]);
    }

    #[test]
    fn test_ends_on_closing_bracket() {
        let parser = ArrayParser::new(BooleanParser);
        let reader = SyntaxReader::new();
        let mut traverser = Traverser::new(
            crate::source::StrSource::new("[true]x").unwrap(),
            crate::context::LineContext::new(),
        );
        reader.advance(&mut traverser).unwrap();
        parser.parse(&mut traverser, &reader).unwrap();
        assert_eq!(traverser.current(), Some(']'));
        assert_eq!(traverser.depth(), 0);
    }

    #[test]
    fn test_recursion_limit() {
        let inner = ArrayParser::new(BooleanParser);
        let outer = ArrayParser::new(inner);
        let reader = SyntaxReader::new().with_max_depth(1);
        let err = parse_with(&outer, &reader, "[[true]]").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::RecursionLimitExceeded { depth: 2, limit: 1 }
        ));
        assert_eq!(parse_with(&outer, &SyntaxReader::new(), "[[true]]").unwrap(), vec![vec![true]]);
    }
}
