use std::iter::Peekable;

use crate::error::SourceError;

/// A cursor over raw characters.
///
/// Sources have no lookahead of their own; the
/// [`Traverser`](crate::Traverser) adds it on top.
///
/// # Contract
///
/// - `next()` is only called after `has_next()` returned `true`.
/// - Once `has_next()` returned `false` it never returns `true` again.
/// - A source that fails while answering `has_next()` reports `true` and
///   surfaces the failure from the following `next()`.
pub trait CharSource {
    /// Returns true if at least one more character can be read.
    fn has_next(&mut self) -> bool;

    /// Consumes and returns the next character.
    ///
    /// Returns [`SourceError::Exhausted`] when no character is left.
    fn next(&mut self) -> Result<char, SourceError>;
}

impl<I> CharSource for Peekable<I>
where
    I: Iterator<Item = char>,
{
    #[inline]
    fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    #[inline]
    fn next(&mut self) -> Result<char, SourceError> {
        Iterator::next(self).ok_or(SourceError::Exhausted)
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<char, SourceError> {
        (**self).next()
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Result<char, SourceError> {
        (**self).next()
    }
}
