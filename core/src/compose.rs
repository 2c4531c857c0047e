//! Lookahead dispatch over a list of token parsers.
//!
//! A [`Compose`] asks each candidate, in declaration order, whether it could
//! parse the input starting at the current character and the one after it.
//! The first candidate to answer yes parses; there is no backtracking.
//!
//! # Recursion
//!
//! Grammars such as JSON contain themselves: an array element is again any
//! value. [`Compose::recursive`] builds such a dispatcher as a fixed point.
//! The builder receives a [`Recursive`] handle standing for the dispatcher
//! under construction and may embed it in any candidate.
//!
//! ```ignore
//! let value = Compose::recursive(|value| {
//!     Compose::new()
//!         .with(StringParser::DEFAULT.map(Value::String))
//!         .with(BooleanParser.map(Value::Bool))
//!         .with(ArrayParser::new(value).map(Value::Array))
//! });
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use crate::error::{ErrorKind, ParseError};
use crate::syntax::SyntaxReader;
use crate::traits::{ComposableParser, JsonParser};
use crate::traverser::Traverser;

type Candidate<T> = Box<dyn ComposableParser<Output = T> + Send + Sync>;

/// A dispatcher selecting one of its candidates by lookahead.
///
/// A dispatcher is itself composable: it could parse whenever any of its
/// candidates could, so dispatchers nest.
pub struct Compose<T> {
    candidates: Vec<Candidate<T>>,
}

impl<T> Compose<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Appends a candidate. Earlier candidates take precedence.
    #[inline]
    pub fn with<P>(mut self, parser: P) -> Self
    where
        P: ComposableParser<Output = T> + Send + Sync + 'static,
    {
        self.push(parser);
        self
    }

    #[inline]
    pub fn push<P>(&mut self, parser: P)
    where
        P: ComposableParser<Output = T> + Send + Sync + 'static,
    {
        self.candidates.push(Box::new(parser));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn select(&self, current: char, next: Option<char>) -> Option<(usize, &Candidate<T>)> {
        self.candidates
            .iter()
            .enumerate()
            .find(|(_, candidate)| candidate.could_parse(current, next))
    }
}

impl<T: 'static> Compose<T> {
    /// Builds a dispatcher that can refer to itself through the handle
    /// passed to `build`.
    ///
    /// The handle is only valid while the returned `Arc` is alive.
    pub fn recursive<F>(build: F) -> Arc<Self>
    where
        F: FnOnce(Recursive<T>) -> Self,
    {
        Arc::new_cyclic(|this| {
            build(Recursive {
                inner: Weak::clone(this),
            })
        })
    }
}

impl<T> Default for Compose<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> JsonParser for Compose<T> {
    type Output = T;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<T, ParseError> {
        let current = reader.current(traverser)?;
        let next = reader.peek(traverser)?;
        match self.select(current, next) {
            Some((index, candidate)) => {
                tracing::trace!(%current, ?next, index, "dispatching");
                candidate.parse(traverser, reader)
            }
            None => Err(reader.error(traverser, ErrorKind::UnexpectedToken(current))),
        }
    }
}

impl<T> ComposableParser for Compose<T> {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        self.select(current, next).is_some()
    }
}

impl<T> fmt::Debug for Compose<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("candidates", &self.candidates.len())
            .finish()
    }
}

/// Handle to a dispatcher built by [`Compose::recursive`].
///
/// Fails with [`ErrorKind::DetachedParser`] once the dispatcher is dropped.
pub struct Recursive<T> {
    inner: Weak<Compose<T>>,
}

impl<T> Clone for Recursive<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> JsonParser for Recursive<T> {
    type Output = T;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<T, ParseError> {
        match self.inner.upgrade() {
            Some(compose) => compose.parse(traverser, reader),
            None => Err(reader.error(traverser, ErrorKind::DetachedParser)),
        }
    }
}

impl<T> ComposableParser for Recursive<T> {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|compose| compose.could_parse(current, next))
    }
}

impl<T> fmt::Debug for Recursive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recursive")
            .field("attached", &(self.inner.strong_count() > 0))
            .finish()
    }
}
