//! Parser configuration for resource limits and behavior tuning.
//!
//! This module provides [`ParseConfig`] for controlling how input is
//! traversed and how errors are rendered, including recursion limits to
//! prevent stack overflow on deeply nested input.
//!
//! # Recursion Limits
//!
//! Arrays and objects enter a nested scope for every level. The default limit
//! of 128 matches `serde_json`.
//!
//! # Example
//!
//! ```ignore
//! use jsonic_core::config::{NewlineConvention, ParseConfig};
//!
//! // Defaults: LF newlines, 32 characters of history, 50 in backtraces
//! let config = ParseConfig::default();
//!
//! // Windows line endings and a full consumption check
//! let config = ParseConfig::new()
//!     .with_newline(NewlineConvention::CrLf)
//!     .with_ensure_consumed(true);
//! ```

use std::num::NonZeroUsize;

use crate::error::ErrorKind;

/// Which characters complete a logical line.
///
/// A lone `\r` never ends a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NewlineConvention {
    /// Every `\n` ends a line, so `\r\n` counts once.
    #[default]
    Lf,
    /// A `\n` ends a line only when directly preceded by `\r`.
    CrLf,
}

impl NewlineConvention {
    /// Returns true if `ch`, read after `previous`, completes a line.
    #[inline]
    pub const fn ends_line(self, previous: Option<char>, ch: char) -> bool {
        match self {
            Self::Lf => ch == '\n',
            Self::CrLf => ch == '\n' && matches!(previous, Some('\r')),
        }
    }
}

/// Whether a separator may directly precede the closing symbol of an array
/// or object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrailingPolicy {
    /// `[a,]` is an error.
    #[default]
    Forbidden,
    /// `[a,]` parses as `[a]`.
    Optional,
}

/// Configuration for traversal, error rendering and resource limits.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `newline` | `Lf` | Counts `\r\n` once |
/// | `history_capacity` | 32 | Enough for a readable backtrace |
/// | `backtrace_limit` | 50 | Caps the rendered backtrace |
/// | `max_recursion_depth` | 128 | Matches serde_json default |
/// | `ensure_consumed` | `false` | Parsers return on the first complete value |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    /// Line terminator convention used for line counting.
    pub newline: NewlineConvention,

    /// Number of characters of the current line kept for backtraces.
    pub history_capacity: NonZeroUsize,

    /// Maximum number of characters shown in a backtrace.
    pub backtrace_limit: usize,

    /// Maximum allowed nesting of arrays and objects.
    ///
    /// Exceeding it fails with [`ErrorKind::RecursionLimitExceeded`].
    pub max_recursion_depth: usize,

    /// Reject non-whitespace input after the top-level value.
    ///
    /// Only the drivers consult this; token parsers always stop on the last
    /// character of their production.
    pub ensure_consumed: bool,
}

impl Default for ParseConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        newline: NewlineConvention::Lf,
        history_capacity: NonZeroUsize::MIN.saturating_add(31),
        backtrace_limit: 50,
        max_recursion_depth: 128,
        ensure_consumed: false,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_newline(mut self, newline: NewlineConvention) -> Self {
        self.newline = newline;
        self
    }

    #[inline]
    pub const fn with_history_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.history_capacity = capacity;
        self
    }

    #[inline]
    pub const fn with_backtrace_limit(mut self, limit: usize) -> Self {
        self.backtrace_limit = limit;
        self
    }

    /// Sets the maximum recursion depth. Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    #[inline]
    pub const fn with_ensure_consumed(mut self, ensure: bool) -> Self {
        self.ensure_consumed = ensure;
        self
    }

    /// Disables the recursion limit.
    ///
    /// # Warning
    ///
    /// Only use this when parsing trusted input! Untrusted deeply-nested
    /// input can cause stack overflow.
    #[inline]
    pub const fn disable_recursion_limit(self) -> Self {
        self.with_max_recursion_depth(usize::MAX)
    }
}

/// Tracks recursion depth during parsing.
///
/// Carried by the [`Traverser`](crate::Traverser); the limit comes from the
/// [`SyntaxReader`](crate::SyntaxReader).
///
/// # Example
///
/// ```ignore
/// reader.enter_nested(traverser)?; // increments depth, checks limit
/// let items = parse_items(traverser, reader);
/// traverser.exit_nested();         // decrements depth
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionGuard {
    depth: usize,
}

impl RecursionGuard {
    #[inline]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Current recursion depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a nested context, incrementing depth.
    ///
    /// Returns `Err(ErrorKind::RecursionLimitExceeded)` if the new depth
    /// exceeds `limit`. The depth stays incremented, so callers exit even on
    /// failure.
    #[inline]
    pub fn enter(&mut self, limit: usize) -> Result<(), ErrorKind> {
        self.depth = self.depth.saturating_add(1);
        if self.depth > limit {
            Err(ErrorKind::RecursionLimitExceeded {
                depth: self.depth,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Exit a nested context, decrementing depth.
    ///
    /// Uses saturating subtraction so extra `exit()` calls don't underflow.
    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn reset(&mut self) {
        self.depth = 0;
    }
}
