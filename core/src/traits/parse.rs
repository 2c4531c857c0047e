use std::rc::Rc;
use std::sync::Arc;

use super::peek::ComposableParser;
use crate::error::ParseError;
use crate::syntax::SyntaxReader;
use crate::traverser::Traverser;

/// Trait for parsers of one grammar production.
///
/// A parser starts on the current character of the traverser and finishes
/// on the last character it owns, never the one after. Callers that need
/// to continue (an array looking for `,` or `]`) advance themselves.
///
/// # Example
///
/// ```ignore
/// let mut traverser = Traverser::new(StrSource::new("\"hi\" tail")?, HistoryContext::new());
/// traverser.next()?;
/// let text = StringParser::DEFAULT.parse(&mut traverser, &SyntaxReader::default())?;
/// assert_eq!(text, "hi");
/// assert_eq!(traverser.current(), Some('"'));
/// ```
///
/// # Blanket Implementations
///
/// - `&P`, `Box<P>`, `Rc<P>`, `Arc<P>`: delegate to `P`
pub trait JsonParser {
    /// The value produced by this parser.
    type Output;

    /// Parse one production from `traverser`.
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<Self::Output, ParseError>;

    /// Converts the output of this parser with `f`.
    ///
    /// Lookahead is preserved, so a mapped token parser can still be composed
    /// into a [`Compose`](crate::Compose).
    #[inline]
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { parser: self, f }
    }
}

impl<P: JsonParser + ?Sized> JsonParser for &P {
    type Output = P::Output;

    #[inline]
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<Self::Output, ParseError> {
        (**self).parse(traverser, reader)
    }
}

impl<P: JsonParser + ?Sized> JsonParser for Box<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<Self::Output, ParseError> {
        (**self).parse(traverser, reader)
    }
}

impl<P: JsonParser + ?Sized> JsonParser for Rc<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<Self::Output, ParseError> {
        (**self).parse(traverser, reader)
    }
}

impl<P: JsonParser + ?Sized> JsonParser for Arc<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<Self::Output, ParseError> {
        (**self).parse(traverser, reader)
    }
}

/// Parser returned by [`JsonParser::map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F, U> JsonParser for Map<P, F>
where
    P: JsonParser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<U, ParseError> {
        self.parser.parse(traverser, reader).map(&self.f)
    }
}

impl<P, F, U> ComposableParser for Map<P, F>
where
    P: ComposableParser,
    F: Fn(P::Output) -> U,
{
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        self.parser.could_parse(current, next)
    }
}

/// A parser built from a closure.
///
/// Without a lookahead predicate the parser is never selected by a
/// dispatcher; attach one with [`ParserFn::with_lookahead`].
#[derive(Debug, Clone, Copy)]
pub struct ParserFn<F, L = fn(char, Option<char>) -> bool> {
    parse: F,
    lookahead: L,
}

/// Wraps `f` as a [`JsonParser`].
///
/// # Example
///
/// ```ignore
/// let word = parser_fn(|traverser, reader| {
///     reader.accumulate_while(traverser, |_, ch| ch.is_ascii_lowercase())
/// })
/// .with_lookahead(|current, _| current.is_ascii_lowercase());
/// ```
#[inline]
pub fn parser_fn<F, T>(f: F) -> ParserFn<F>
where
    F: Fn(&mut Traverser<'_>, &SyntaxReader) -> Result<T, ParseError>,
{
    ParserFn {
        parse: f,
        lookahead: never,
    }
}

fn never(_: char, _: Option<char>) -> bool {
    false
}

impl<F, L> ParserFn<F, L> {
    /// Sets the predicate used by [`ComposableParser::could_parse`].
    #[inline]
    pub fn with_lookahead<M>(self, lookahead: M) -> ParserFn<F, M>
    where
        M: Fn(char, Option<char>) -> bool,
    {
        ParserFn {
            parse: self.parse,
            lookahead,
        }
    }
}

impl<F, L, T> JsonParser for ParserFn<F, L>
where
    F: Fn(&mut Traverser<'_>, &SyntaxReader) -> Result<T, ParseError>,
{
    type Output = T;

    #[inline]
    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<T, ParseError> {
        (self.parse)(traverser, reader)
    }
}

impl<F, L, T> ComposableParser for ParserFn<F, L>
where
    F: Fn(&mut Traverser<'_>, &SyntaxReader) -> Result<T, ParseError>,
    L: Fn(char, Option<char>) -> bool,
{
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        (self.lookahead)(current, next)
    }
}
