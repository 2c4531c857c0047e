use std::rc::Rc;
use std::sync::Arc;

use super::parse::JsonParser;

/// Trait for parsers that can be selected by lookahead.
///
/// `could_parse` identifies a parser from two consecutive characters: the
/// current one and the one after it (`None` at end of input). It must be
/// pure; a [`Compose`](crate::Compose) calls it on every candidate in
/// declaration order and picks the first that returns `true`.
///
/// A `true` answer is a claim, not a guarantee: the selected parser may
/// still fail, and the dispatcher does not try the remaining candidates.
///
/// # Example
///
/// ```ignore
/// impl ComposableParser for NullParser {
///     fn could_parse(&self, current: char, next: Option<char>) -> bool {
///         current == 'n' && next == Some('u')
///     }
/// }
/// ```
pub trait ComposableParser: JsonParser {
    /// Returns true if this parser is the plausible owner of the input
    /// starting with `current`, followed by `next`.
    fn could_parse(&self, current: char, next: Option<char>) -> bool;
}

impl<P: ComposableParser + ?Sized> ComposableParser for &P {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        (**self).could_parse(current, next)
    }
}

impl<P: ComposableParser + ?Sized> ComposableParser for Box<P> {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        (**self).could_parse(current, next)
    }
}

impl<P: ComposableParser + ?Sized> ComposableParser for Rc<P> {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        (**self).could_parse(current, next)
    }
}

impl<P: ComposableParser + ?Sized> ComposableParser for Arc<P> {
    #[inline]
    fn could_parse(&self, current: char, next: Option<char>) -> bool {
        (**self).could_parse(current, next)
    }
}
