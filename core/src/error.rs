//! Core error types for jsonic.
//!
//! Every failure inside a parse call is a [`ParseError`]: a positioned,
//! fully rendered message plus the [`ErrorKind`] that caused it. Errors are
//! created through an [`ErrorFactory`], which is the only place position and
//! backtrace information gets attached.
//!
//! # Rendering
//!
//! The default factory renders messages like this:
//!
//! ```text
//! Error at line 1:6
//! |> [true
//! |>     ^ expected `,` (comma)
//! ```
//!
//! The two `|>` lines are a backtrace read from the history buffer of a
//! [`HistoryContext`](crate::HistoryContext). They are omitted when the
//! context keeps no history or the history is blank.

use std::io;

use thiserror::Error;

use crate::syntax::Symbol;
use crate::traits::ProcessContext;

/// Prefix of both backtrace lines.
pub const BACKTRACE_PREFIX: &str = "|> ";

/// Failure reported by a [`CharSource`](crate::CharSource).
#[derive(Error, Debug)]
pub enum SourceError {
    /// A read was attempted with no characters remaining.
    #[error("unexpected end of input")]
    Exhausted,

    /// An in-memory source was constructed over empty input.
    #[error("input is empty")]
    Empty,

    /// A sub-range does not address characters of the input.
    #[error("range {start}..{end} is not a character range of input with length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A byte stream carried a malformed UTF-8 sequence.
    #[error("invalid UTF-8 sequence {bytes:02x?}")]
    InvalidUtf8 { bytes: Vec<u8> },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What went wrong, independent of where.
#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A parser ran on a traverser that never read a character.
    #[error("no character has been read yet")]
    NotStarted,

    #[error("expected {0}")]
    ExpectedSymbol(Symbol),

    #[error("expected character `{0}`")]
    ExpectedCharacter(char),

    #[error("unexpected token `{0}`, expected `true` or `false`")]
    ExpectedBoolean(char),

    /// No candidate of a dispatcher accepted the lookahead.
    #[error("unexpected token `{0}`")]
    UnexpectedToken(char),

    /// The input ended on an escape character or an escaped quote.
    #[error("last double quote is escaped")]
    EscapedTerminator,

    /// A key was repeated in an object parsed in strict mode.
    #[error("key {0} is a duplicate")]
    DuplicateKey(String),

    /// A separator directly precedes the closing symbol.
    #[error("trailing {separator} before {closing}")]
    TrailingSeparator { separator: Symbol, closing: Symbol },

    /// Non-whitespace input follows a complete top-level value.
    #[error("unexpected trailing content `{0}`")]
    TrailingContent(char),

    /// Nested parsing exceeded the configured depth.
    #[error("recursion limit exceeded: depth {depth} > limit {limit}")]
    RecursionLimitExceeded { depth: usize, limit: usize },

    /// A [`Recursive`](crate::Recursive) handle was used after its dispatcher
    /// was dropped.
    #[error("recursive parser outlived its dispatcher")]
    DetachedParser,

    #[error("{0}")]
    Custom(String),
}

impl ErrorKind {
    /// Returns true if the input ended before the production was complete.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ErrorKind::Source(SourceError::Exhausted))
    }
}

/// A positioned syntax error.
///
/// `Display` yields the rendered message, which starts with
/// `Error at line <line>:<column>`.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ParseError {
    #[source]
    kind: ErrorKind,
    line: usize,
    column: usize,
    message: String,
}

impl ParseError {
    /// Creates an error from an already rendered message.
    ///
    /// `line` is one-based, `column` counts the characters consumed on that
    /// line.
    pub fn new(kind: ErrorKind, line: usize, column: usize, message: String) -> Self {
        Self {
            kind,
            line,
            column,
            message,
        }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// One-based line of the error.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns an [`ErrorKind`] plus the current process context into a
/// [`ParseError`].
///
/// Any `Fn(&dyn ProcessContext, ErrorKind) -> ParseError` is a factory, which
/// allows callers to plug in their own rendering.
pub trait ErrorFactory {
    fn create(&self, context: &dyn ProcessContext, kind: ErrorKind) -> ParseError;
}

impl<F> ErrorFactory for F
where
    F: Fn(&dyn ProcessContext, ErrorKind) -> ParseError,
{
    #[inline]
    fn create(&self, context: &dyn ProcessContext, kind: ErrorKind) -> ParseError {
        self(context, kind)
    }
}

/// Factory rendering `Error at line L:C` messages with an inline backtrace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultErrorFactory {
    backtrace_limit: usize,
}

impl DefaultErrorFactory {
    /// Default cap on the number of backtrace characters.
    pub const BACKTRACE_LIMIT: usize = 50;

    pub const DEFAULT: Self = Self {
        backtrace_limit: Self::BACKTRACE_LIMIT,
    };

    #[inline]
    pub const fn new(backtrace_limit: usize) -> Self {
        Self { backtrace_limit }
    }

    #[inline]
    pub const fn backtrace_limit(&self) -> usize {
        self.backtrace_limit
    }
}

impl Default for DefaultErrorFactory {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ErrorFactory for DefaultErrorFactory {
    fn create(&self, context: &dyn ProcessContext, kind: ErrorKind) -> ParseError {
        let line = context.line_index() + 1;
        let column = context.column_in_line();
        let message = render_message(context, &kind.to_string(), self.backtrace_limit);
        tracing::debug!(line, column, error = %kind, "syntax error");
        ParseError::new(kind, line, column, message)
    }
}

/// Renders `details` with the position and backtrace of `context`.
pub fn render_message(context: &dyn ProcessContext, details: &str, backtrace_limit: usize) -> String {
    let mut out = format!(
        "Error at line {}:{}\n",
        context.line_index() + 1,
        context.column_in_line()
    );
    let max_len = context.column_in_line().min(backtrace_limit);
    if let Some(backtrace) = context.backtrace(max_len) {
        // Line breaks the newline convention does not count stay in the
        // history; only the text after the last one fits the two-line block.
        let backtrace = backtrace.rsplit(['\r', '\n']).next().unwrap_or_default().trim();
        if !backtrace.is_empty() {
            let indent = backtrace.chars().count() - 1;
            out.push_str(BACKTRACE_PREFIX);
            out.push_str(backtrace);
            out.push('\n');
            out.push_str(BACKTRACE_PREFIX);
            out.push_str(&" ".repeat(indent));
            out.push_str("^ ");
        }
    }
    out.push_str(details);
    out
}
