//! Structural symbols and the [`SyntaxReader`] helpers shared by all token
//! parsers.

use std::fmt;
use std::sync::Arc;

use crate::config::ParseConfig;
use crate::error::{DefaultErrorFactory, ErrorFactory, ErrorKind, ParseError};
use crate::traits::ProcessContext;
use crate::traverser::Traverser;

/// A structural character of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    DoubleQuote,
    CurlyOpen,
    CurlyClose,
    SquareOpen,
    SquareClose,
    Comma,
    Colon,
}

impl Symbol {
    #[inline]
    pub const fn literal(self) -> char {
        match self {
            Self::DoubleQuote => '"',
            Self::CurlyOpen => '{',
            Self::CurlyClose => '}',
            Self::SquareOpen => '[',
            Self::SquareClose => ']',
            Self::Comma => ',',
            Self::Colon => ':',
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DoubleQuote => "double quote",
            Self::CurlyOpen => "opening brace",
            Self::CurlyClose => "closing brace",
            Self::SquareOpen => "opening bracket",
            Self::SquareClose => "closing bracket",
            Self::Comma => "comma",
            Self::Colon => "colon",
        }
    }

    #[inline]
    pub const fn matches(self, ch: char) -> bool {
        self.literal() == ch
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` ({})", self.literal(), self.name())
    }
}

/// Low-level reading operations over a [`Traverser`], raising positioned
/// errors through an [`ErrorFactory`].
///
/// A reader holds no per-parse state and can be shared between threads and
/// parse calls.
///
/// # Example
///
/// ```ignore
/// let reader = SyntaxReader::default();
/// let mut traverser = Traverser::new(StrSource::new("[  true")?, LineContext::new());
/// reader.advance(&mut traverser)?;
/// reader.expect_symbol(&traverser, Symbol::SquareOpen)?;
/// reader.skip_whitespace(&mut traverser)?;
/// reader.expect_literal(&mut traverser, "true")?;
/// assert_eq!(traverser.current(), Some('e'));
/// ```
#[derive(Clone)]
pub struct SyntaxReader {
    errors: Arc<dyn ErrorFactory + Send + Sync>,
    max_depth: usize,
}

impl SyntaxReader {
    /// Creates a reader with the [`DefaultErrorFactory`] and default limits.
    pub fn new() -> Self {
        Self::from_config(&ParseConfig::DEFAULT)
    }

    /// Creates a reader honoring the backtrace and recursion limits of
    /// `config`.
    pub fn from_config(config: &ParseConfig) -> Self {
        Self {
            errors: Arc::new(DefaultErrorFactory::new(config.backtrace_limit)),
            max_depth: config.max_recursion_depth,
        }
    }

    /// Replaces the error factory.
    pub fn with_error_factory<F>(mut self, factory: F) -> Self
    where
        F: ErrorFactory + Send + Sync + 'static,
    {
        self.errors = Arc::new(factory);
        self
    }

    #[inline]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Creates a positioned error from the state of `traverser`.
    #[inline]
    pub fn error(&self, traverser: &Traverser<'_>, kind: impl Into<ErrorKind>) -> ParseError {
        self.error_in(traverser.context(), kind)
    }

    /// Creates a positioned error from `context` alone, for failures raised
    /// before a traverser exists.
    pub fn error_in(&self, context: &dyn ProcessContext, kind: impl Into<ErrorKind>) -> ParseError {
        self.errors.create(context, kind.into())
    }

    /// Reads the next character.
    #[inline]
    pub fn advance(&self, traverser: &mut Traverser<'_>) -> Result<char, ParseError> {
        traverser.next().map_err(|e| self.error(traverser, e))
    }

    /// The character after the current one, without consuming it.
    ///
    /// `None` at end of input. A source failure while looking ahead is
    /// reported here instead of being mistaken for the end.
    #[inline]
    pub fn peek(&self, traverser: &mut Traverser<'_>) -> Result<Option<char>, ParseError> {
        traverser.try_peek().map_err(|e| self.error(traverser, e))
    }

    /// The current character, failing if nothing has been read.
    #[inline]
    pub fn current(&self, traverser: &Traverser<'_>) -> Result<char, ParseError> {
        traverser
            .current()
            .ok_or_else(|| self.error(traverser, ErrorKind::NotStarted))
    }

    /// Reads at least one character, then keeps reading while `skip` holds.
    ///
    /// Returns the first character rejected by `skip`, which is left as the
    /// current one. Fails if the input ends first.
    pub fn skip_while<P>(&self, traverser: &mut Traverser<'_>, mut skip: P) -> Result<char, ParseError>
    where
        P: FnMut(char) -> bool,
    {
        loop {
            let ch = self.advance(traverser)?;
            if !skip(ch) {
                return Ok(ch);
            }
        }
    }

    /// [`skip_while`](Self::skip_while) over whitespace.
    #[inline]
    pub fn skip_whitespace(&self, traverser: &mut Traverser<'_>) -> Result<char, ParseError> {
        self.skip_while(traverser, char::is_whitespace)
    }

    /// Checks that the current character is `symbol`.
    pub fn expect_symbol(&self, traverser: &Traverser<'_>, symbol: Symbol) -> Result<(), ParseError> {
        if symbol.matches(self.current(traverser)?) {
            Ok(())
        } else {
            Err(self.error(traverser, ErrorKind::ExpectedSymbol(symbol)))
        }
    }

    /// Checks that the current character is `expected`.
    pub fn expect_char(&self, traverser: &Traverser<'_>, expected: char) -> Result<(), ParseError> {
        if self.current(traverser)? == expected {
            Ok(())
        } else {
            Err(self.error(traverser, ErrorKind::ExpectedCharacter(expected)))
        }
    }

    /// Matches `literal` starting at the current character.
    ///
    /// The traverser ends on the last character of the literal. A mismatch,
    /// or the input ending early, reports the first literal character that
    /// was not matched.
    pub fn expect_literal(&self, traverser: &mut Traverser<'_>, literal: &str) -> Result<(), ParseError> {
        let mut chars = literal.chars();
        let Some(first) = chars.next() else {
            return Ok(());
        };
        self.expect_char(traverser, first)?;
        for expected in chars {
            if !traverser.has_next() || self.advance(traverser)? != expected {
                return Err(self.error(traverser, ErrorKind::ExpectedCharacter(expected)));
            }
        }
        Ok(())
    }

    /// Counts the run of characters accepted by `accept`, starting at the
    /// current character.
    ///
    /// `accept` receives the previously accepted character (`None` for the
    /// first) and the candidate. Candidates after the current one are
    /// peeked, so the traverser ends on the last accepted character and the
    /// rejected one stays unread. Returns zero without consuming when the
    /// current character is rejected.
    pub fn read_while<P>(&self, traverser: &mut Traverser<'_>, accept: P) -> Result<usize, ParseError>
    where
        P: FnMut(Option<char>, char) -> bool,
    {
        self.scan(traverser, accept)
    }

    /// Like [`read_while`](Self::read_while), collecting the accepted
    /// characters.
    pub fn accumulate_while<P>(&self, traverser: &mut Traverser<'_>, mut accept: P) -> Result<String, ParseError>
    where
        P: FnMut(Option<char>, char) -> bool,
    {
        let mut out = String::new();
        self.scan(traverser, |last, ch| {
            let accepted = accept(last, ch);
            if accepted {
                out.push(ch);
            }
            accepted
        })?;
        Ok(out)
    }

    fn scan<P>(&self, traverser: &mut Traverser<'_>, mut accept: P) -> Result<usize, ParseError>
    where
        P: FnMut(Option<char>, char) -> bool,
    {
        let first = self.current(traverser)?;
        if !accept(None, first) {
            return Ok(0);
        }
        let mut count = 1;
        let mut last = first;
        while let Some(next) = traverser.peek() {
            if !accept(Some(last), next) {
                break;
            }
            self.advance(traverser)?;
            count += 1;
            last = next;
        }
        Ok(count)
    }

    /// Enters a nested array or object scope.
    ///
    /// Pair every successful call with [`Traverser::exit_nested`].
    pub fn enter_nested(&self, traverser: &mut Traverser<'_>) -> Result<(), ParseError> {
        match traverser.enter_nested(self.max_depth) {
            Ok(()) => Ok(()),
            Err(kind) => {
                traverser.exit_nested();
                Err(self.error(traverser, kind))
            }
        }
    }
}

impl Default for SyntaxReader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SyntaxReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxReader")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}
