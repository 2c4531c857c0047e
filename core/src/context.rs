//! Process contexts tracking line, column and recent history.

use std::cell::OnceCell;
use std::num::NonZeroUsize;

use crate::traits::ProcessContext;

/// Tracks only the line index and the column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineContext {
    line_index: usize,
    column: usize,
}

impl LineContext {
    #[inline]
    pub const fn new() -> Self {
        Self {
            line_index: 0,
            column: 0,
        }
    }
}

impl ProcessContext for LineContext {
    #[inline]
    fn append(&mut self, _: char) {
        self.column += 1;
    }

    #[inline]
    fn newline(&mut self) {
        self.line_index += 1;
        self.column = 0;
    }

    #[inline]
    fn line_index(&self) -> usize {
        self.line_index
    }

    #[inline]
    fn column_in_line(&self) -> usize {
        self.column
    }
}

/// A [`LineContext`] that also keeps the most recent characters of the
/// current line in a fixed-size circular buffer.
///
/// Appending is O(1) in time and space. Reading the history is O(n) in the
/// number of buffered characters and happens only when an error is rendered,
/// so the reconstructed string is cached until the next write.
///
/// # Example
///
/// ```ignore
/// let mut history = HistoryContext::with_capacity(NonZeroUsize::new(3).unwrap());
/// for ch in "hello".chars() {
///     history.append(ch);
/// }
/// assert_eq!(history.history(), "llo");
/// history.newline();
/// assert_eq!(history.history(), "");
/// ```
#[derive(Debug, Clone)]
pub struct HistoryContext {
    line: LineContext,
    buffer: Box<[char]>,
    head: usize,
    size: usize,
    cached: OnceCell<String>,
}

impl HistoryContext {
    /// Default number of characters kept.
    pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(31);

    /// Creates a context keeping [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// characters.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            line: LineContext::new(),
            buffer: vec!['\0'; capacity.get()].into_boxed_slice(),
            head: 0,
            size: 0,
            cached: OnceCell::new(),
        }
    }

    /// Maximum number of characters kept.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of characters currently kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The kept characters of the current line, oldest first.
    pub fn history(&self) -> &str {
        self.cached.get_or_init(|| {
            let capacity = self.capacity();
            let start = self.head + capacity - self.size;
            (0..self.size)
                .map(|offset| self.buffer[(start + offset) % capacity])
                .collect()
        })
    }

    /// The last `max_len` characters of [`history`](Self::history).
    ///
    /// Returns `None` if `max_len` exceeds the capacity.
    pub fn history_tail(&self, max_len: usize) -> Option<&str> {
        if max_len > self.capacity() {
            return None;
        }
        let history = self.history();
        let skip = self.size.saturating_sub(max_len);
        let start = history
            .char_indices()
            .nth(skip)
            .map_or(history.len(), |(index, _)| index);
        Some(&history[start..])
    }
}

impl Default for HistoryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessContext for HistoryContext {
    fn append(&mut self, ch: char) {
        self.line.append(ch);
        self.buffer[self.head] = ch;
        self.head = (self.head + 1) % self.buffer.len();
        if self.size < self.buffer.len() {
            self.size += 1;
        }
        self.cached.take();
    }

    fn newline(&mut self) {
        self.line.newline();
        self.head = 0;
        self.size = 0;
        self.cached.take();
    }

    #[inline]
    fn line_index(&self) -> usize {
        self.line.line_index()
    }

    #[inline]
    fn column_in_line(&self) -> usize {
        self.line.column_in_line()
    }

    fn backtrace(&self, max_len: usize) -> Option<&str> {
        self.history_tail(max_len.min(self.capacity()))
    }
}
