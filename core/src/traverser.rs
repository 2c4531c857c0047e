//! One-character lookahead over a [`CharSource`].

use std::fmt;
use std::mem;

use crate::config::{NewlineConvention, ParseConfig, RecursionGuard};
use crate::context::HistoryContext;
use crate::error::{ErrorKind, SourceError};
use crate::traits::{CharSource, ProcessContext};

#[derive(Debug)]
enum Lookahead {
    Pending,
    Char(char),
    End,
    Failed(SourceError),
}

/// Pulls characters from a source, keeps the current one and feeds every
/// consumed character to a [`ProcessContext`].
///
/// The traverser starts before the first character: [`current`](Self::current)
/// is `None` until [`next`](Self::next) has succeeded once. A peeked
/// character is cached and handed out by the following `next()`, so peeking
/// never skips input.
///
/// A failure of the source while filling the lookahead is deferred: `peek()`
/// yields `None`, `has_next()` yields `true`, and the next `next()` or
/// [`try_peek`](Self::try_peek) returns the error.
///
/// # Example
///
/// ```ignore
/// let mut traverser = Traverser::new(StrSource::new("ab")?, LineContext::new());
/// assert_eq!(traverser.peek(), Some('a'));
/// assert_eq!(traverser.next()?, 'a');
/// assert_eq!(traverser.current(), Some('a'));
/// assert_eq!(traverser.peek(), Some('b'));
/// ```
pub struct Traverser<'a> {
    source: Box<dyn CharSource + 'a>,
    context: Box<dyn ProcessContext + 'a>,
    newline: NewlineConvention,
    current: Option<char>,
    lookahead: Lookahead,
    depth: RecursionGuard,
}

impl<'a> Traverser<'a> {
    /// Creates a traverser using the `Lf` newline convention.
    ///
    /// `context` may be a `&mut` borrow to inspect it after parsing.
    pub fn new<S, C>(source: S, context: C) -> Self
    where
        S: CharSource + 'a,
        C: ProcessContext + 'a,
    {
        Self {
            source: Box::new(source),
            context: Box::new(context),
            newline: NewlineConvention::Lf,
            current: None,
            lookahead: Lookahead::Pending,
            depth: RecursionGuard::new(),
        }
    }

    /// Creates a traverser with a [`HistoryContext`] sized and a newline
    /// convention chosen by `config`.
    pub fn with_config<S>(source: S, config: &ParseConfig) -> Self
    where
        S: CharSource + 'a,
    {
        Self::new(source, HistoryContext::with_capacity(config.history_capacity))
            .with_newline(config.newline)
    }

    #[inline]
    pub fn with_newline(mut self, newline: NewlineConvention) -> Self {
        self.newline = newline;
        self
    }

    fn fill(&mut self) {
        if matches!(self.lookahead, Lookahead::Pending) {
            self.lookahead = if self.source.has_next() {
                match self.source.next() {
                    Ok(ch) => Lookahead::Char(ch),
                    Err(e) => Lookahead::Failed(e),
                }
            } else {
                Lookahead::End
            };
        }
    }

    /// Returns true if another call to [`next`](Self::next) will not report
    /// the end of input.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        !matches!(self.lookahead, Lookahead::End)
    }

    /// Returns the character after the current one without consuming it.
    ///
    /// `None` at end of input. Calling it repeatedly yields the same value.
    pub fn peek(&mut self) -> Option<char> {
        self.fill();
        match self.lookahead {
            Lookahead::Char(ch) => Some(ch),
            _ => None,
        }
    }

    /// Like [`peek`](Self::peek), but reports a failed lookahead instead of
    /// treating it as the end of input.
    ///
    /// The failure is handed out once, as [`next`](Self::next) would.
    pub fn try_peek(&mut self) -> Result<Option<char>, SourceError> {
        self.fill();
        match mem::replace(&mut self.lookahead, Lookahead::Pending) {
            Lookahead::Failed(e) => Err(e),
            other => {
                self.lookahead = other;
                Ok(self.peek())
            }
        }
    }

    /// Advances to the next character and returns it.
    pub fn next(&mut self) -> Result<char, SourceError> {
        self.fill();
        match mem::replace(&mut self.lookahead, Lookahead::Pending) {
            Lookahead::Char(ch) => {
                self.record(ch);
                Ok(ch)
            }
            Lookahead::End => {
                self.lookahead = Lookahead::End;
                Err(SourceError::Exhausted)
            }
            Lookahead::Failed(e) => Err(e),
            Lookahead::Pending => Err(SourceError::Exhausted),
        }
    }

    fn record(&mut self, ch: char) {
        let previous = self.current.replace(ch);
        self.context.append(ch);
        if self.newline.ends_line(previous, ch) {
            self.context.newline();
        }
    }

    /// The last character returned by [`next`](Self::next).
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns true once at least one character has been consumed.
    #[inline]
    pub fn has_read(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    pub fn context(&self) -> &dyn ProcessContext {
        &*self.context
    }

    #[inline]
    pub fn newline_convention(&self) -> NewlineConvention {
        self.newline
    }

    /// Current nesting depth of arrays and objects.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth.depth()
    }

    /// Enters a nested scope.
    ///
    /// Prefer [`SyntaxReader::enter_nested`](crate::SyntaxReader::enter_nested),
    /// which positions the error.
    #[inline]
    pub fn enter_nested(&mut self, limit: usize) -> Result<(), ErrorKind> {
        self.depth.enter(limit)
    }

    #[inline]
    pub fn exit_nested(&mut self) {
        self.depth.exit();
    }
}

impl fmt::Debug for Traverser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverser")
            .field("current", &self.current)
            .field("lookahead", &self.lookahead)
            .field("newline", &self.newline)
            .field("line_index", &self.context.line_index())
            .field("column", &self.context.column_in_line())
            .field("depth", &self.depth.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LineContext;
    use crate::source::{ReaderSource, StrSource};

    fn traverser(input: &str) -> Traverser<'_> {
        Traverser::new(StrSource::new(input).unwrap(), LineContext::new())
    }

    #[test]
    fn test_starts_before_first_character() {
        let mut t = traverser("ab");
        assert_eq!(t.current(), None);
        assert!(!t.has_read());
        assert!(t.has_next());
        assert_eq!(t.next().unwrap(), 'a');
        assert_eq!(t.current(), Some('a'));
        assert!(t.has_read());
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut t = traverser("xyz");
        t.next().unwrap();
        assert_eq!(t.peek(), Some('y'));
        assert_eq!(t.peek(), Some('y'));
        assert_eq!(t.current(), Some('x'));
        assert_eq!(t.next().unwrap(), 'y');
        assert_eq!(t.next().unwrap(), 'z');
        assert_eq!(t.peek(), None);
        assert!(!t.has_next());
    }

    #[test]
    fn test_next_at_end_fails_and_keeps_current() {
        let mut t = traverser("a");
        t.next().unwrap();
        assert!(matches!(t.next(), Err(SourceError::Exhausted)));
        assert!(matches!(t.next(), Err(SourceError::Exhausted)));
        assert_eq!(t.current(), Some('a'));
    }

    #[test]
    fn test_peek_does_not_touch_context() {
        let mut context = LineContext::new();
        {
            let mut t = Traverser::new(StrSource::new("ab").unwrap(), &mut context);
            t.next().unwrap();
            t.peek();
            assert_eq!(t.context().column_in_line(), 1);
        }
        assert_eq!(context.column_in_line(), 1);
    }

    #[test]
    fn test_lf_counts_crlf_once() {
        let mut t = traverser("a\r\nb\nc");
        while t.has_next() {
            t.next().unwrap();
        }
        assert_eq!(t.context().line_index(), 2);
        assert_eq!(t.context().column_in_line(), 1);
    }

    #[test]
    fn test_crlf_ignores_bare_lf() {
        let mut t = traverser("a\r\nb\nc").with_newline(NewlineConvention::CrLf);
        while t.has_next() {
            t.next().unwrap();
        }
        assert_eq!(t.context().line_index(), 1);
        assert_eq!(t.context().column_in_line(), 3);
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_line() {
        let mut t = traverser("a\rb");
        while t.has_next() {
            t.next().unwrap();
        }
        assert_eq!(t.context().line_index(), 0);
        assert_eq!(t.context().column_in_line(), 3);
    }

    #[test]
    fn test_deferred_source_failure() {
        let mut t = Traverser::new(ReaderSource::new(&[b'a', 0xff, b'b'][..]), LineContext::new());
        assert_eq!(t.next().unwrap(), 'a');
        assert_eq!(t.peek(), None);
        assert!(t.has_next());
        assert!(matches!(t.next(), Err(SourceError::InvalidUtf8 { .. })));
        assert_eq!(t.current(), Some('a'));
        assert_eq!(t.next().unwrap(), 'b');
    }

    #[test]
    fn test_try_peek_reports_source_failure() {
        let mut t = Traverser::new(ReaderSource::new(&[b'a', 0xff, b'b'][..]), LineContext::new());
        assert_eq!(t.next().unwrap(), 'a');
        assert!(matches!(t.try_peek(), Err(SourceError::InvalidUtf8 { .. })));
        assert_eq!(t.try_peek().unwrap(), Some('b'));
        assert_eq!(t.current(), Some('a'));
        assert_eq!(t.next().unwrap(), 'b');
        assert_eq!(t.try_peek().unwrap(), None);
    }

    #[test]
    fn test_with_config_uses_history() {
        let config = ParseConfig::new().with_newline(NewlineConvention::CrLf);
        let mut t = Traverser::with_config(StrSource::new("abc").unwrap(), &config);
        assert_eq!(t.newline_convention(), NewlineConvention::CrLf);
        while t.has_next() {
            t.next().unwrap();
        }
        assert_eq!(t.context().backtrace(2), Some("bc"));
    }

    #[test]
    fn test_nesting_depth() {
        let mut t = traverser("[");
        t.enter_nested(1).unwrap();
        assert_eq!(t.depth(), 1);
        assert!(t.enter_nested(1).is_err());
        t.exit_nested();
        t.exit_nested();
        assert_eq!(t.depth(), 0);
    }
}
