//! Byte cursor for line-oriented scanning.

use crate::Range;

/// A cursor over an input buffer.
///
/// # Example
/// ```
/// use listmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"  * item");
/// assert_eq!(cursor.skip_while(|b| b == b' '), 2);
/// assert_eq!(cursor.peek(), Some(b'*'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset.
    #[inline]
    pub fn new_at(input: &'a [u8], offset: usize) -> Self {
        debug_assert!(offset <= input.len());
        Self {
            input,
            pos: offset.min(input.len()),
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by n bytes, stopping at end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Move to an absolute offset.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset <= self.input.len());
        self.pos = offset.min(self.input.len());
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Range from a start offset to the current position.
    #[inline]
    pub fn range_from(&self, start: usize) -> Range {
        Range::from_usize(start, self.pos)
    }

    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Distance to the next newline.
    #[inline]
    pub fn find_newline(&self) -> Option<usize> {
        memchr::memchr(b'\n', self.remaining_slice())
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
