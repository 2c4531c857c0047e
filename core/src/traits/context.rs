/// Position bookkeeping fed by the [`Traverser`](crate::Traverser).
///
/// The traverser calls [`append`](Self::append) for every consumed character
/// and [`newline`](Self::newline) after a character that completes a logical
/// line terminator. Implementations never interpret the characters
/// themselves: appending `'\n'` only advances the column.
pub trait ProcessContext {
    /// Records a consumed character.
    fn append(&mut self, ch: char);

    /// Moves to the start of the next line.
    fn newline(&mut self);

    /// Zero-based index of the current line.
    fn line_index(&self) -> usize;

    /// Number of characters consumed on the current line.
    fn column_in_line(&self) -> usize;

    /// Up to `max_len` of the most recently consumed characters of the
    /// current line, oldest first.
    ///
    /// Contexts without history return `None`.
    fn backtrace(&self, max_len: usize) -> Option<&str> {
        let _ = max_len;
        None
    }
}

impl<C: ProcessContext + ?Sized> ProcessContext for &mut C {
    #[inline]
    fn append(&mut self, ch: char) {
        (**self).append(ch);
    }

    #[inline]
    fn newline(&mut self) {
        (**self).newline();
    }

    #[inline]
    fn line_index(&self) -> usize {
        (**self).line_index()
    }

    #[inline]
    fn column_in_line(&self) -> usize {
        (**self).column_in_line()
    }

    #[inline]
    fn backtrace(&self, max_len: usize) -> Option<&str> {
        (**self).backtrace(max_len)
    }
}

impl<C: ProcessContext + ?Sized> ProcessContext for Box<C> {
    #[inline]
    fn append(&mut self, ch: char) {
        (**self).append(ch);
    }

    #[inline]
    fn newline(&mut self) {
        (**self).newline();
    }

    #[inline]
    fn line_index(&self) -> usize {
        (**self).line_index()
    }

    #[inline]
    fn column_in_line(&self) -> usize {
        (**self).column_in_line()
    }

    #[inline]
    fn backtrace(&self, max_len: usize) -> Option<&str> {
        (**self).backtrace(max_len)
    }
}
