//! Line lexer: splits a document into list blocks.
//!
//! A block starts at a line indented by two or more spaces, or one or more
//! tabs, followed by an item marker. Every following line that starts the
//! same way (continuation markers `..` included) stays in the block; the
//! first newline not followed by such a line ends it. Within a block, the
//! text after a marker up to the end of its line is unmatched content.
//!
//! A newline in front of a marker belongs to the marker's span, so it is
//! dropped with a structural marker and kept with one demoted to text. The
//! newline that ends a block is left in the following outer text.

use crate::Range;
use crate::cursor::Cursor;
use crate::list::scan_marker;

/// One lexical unit of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// Text outside any list block.
    Text(Range),
    /// First marker of a block: the newline in front of it (if any),
    /// indentation and marker.
    Enter(Range),
    /// Any later marker of the same block: newline, indentation and marker.
    Matched(Range),
    /// Item text between markers.
    Unmatched(Range),
    /// End of the current block.
    Exit,
}

/// Iterator over the lexemes of a document.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a [u8],
    cursor: Cursor<'a>,
    in_block: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            in_block: false,
        }
    }

    fn next_outside(&mut self) -> Option<Lexeme> {
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            let start = self.cursor.offset();

            if let Some(end) = self.block_start(start) {
                self.cursor.seek(end);
                self.in_block = true;
                return Some(Lexeme::Enter(Range::from_usize(start, end)));
            }

            // Text runs up to the newline in front of the next block.
            let mut search = start;
            let end = loop {
                match memchr::memchr(b'\n', &self.input[search..]) {
                    Some(i) => {
                        let newline = search + i;
                        if marker_end(self.input, newline + 1, false).is_some() {
                            self.cursor.seek(newline);
                            break newline;
                        }
                        search = newline + 1;
                    }
                    None => {
                        self.cursor.seek(self.input.len());
                        break self.input.len();
                    }
                }
            };

            if end > start {
                return Some(Lexeme::Text(Range::from_usize(start, end)));
            }
        }
    }

    /// End of the block-opening marker at `start`, which is either the start
    /// of input or a newline.
    fn block_start(&self, start: usize) -> Option<usize> {
        if start == 0 {
            if let Some(end) = marker_end(self.input, 0, false) {
                return Some(end);
            }
        }
        if self.cursor.peek() == Some(b'\n') {
            return marker_end(self.input, start + 1, false);
        }
        None
    }

    fn next_inside(&mut self) -> Lexeme {
        let start = self.cursor.offset();
        let line_rest = self
            .cursor
            .find_newline()
            .unwrap_or(self.cursor.remaining());
        if line_rest > 0 {
            self.cursor.advance(line_rest);
            return Lexeme::Unmatched(self.cursor.range_from(start));
        }

        if !self.cursor.is_eof() {
            if let Some(end) = marker_end(self.input, start + 1, true) {
                self.cursor.seek(end);
                return Lexeme::Matched(Range::from_usize(start, end));
            }
        }

        self.in_block = false;
        Lexeme::Exit
    }
}

impl Iterator for Lexer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        if self.in_block {
            Some(self.next_inside())
        } else {
            self.next_outside()
        }
    }
}

/// End offset of the indentation + marker starting at `line_start`.
///
/// Indentation is either all tabs (at least one) or all spaces (at least
/// two).
fn marker_end(input: &[u8], line_start: usize, in_block: bool) -> Option<usize> {
    if line_start >= input.len() {
        return None;
    }
    let mut cursor = Cursor::new_at(input, line_start);
    match cursor.peek()? {
        b'\t' => {
            cursor.skip_while(|b| b == b'\t');
        }
        b' ' => {
            if cursor.skip_while(|b| b == b' ') < 2 {
                return None;
            }
        }
        _ => return None,
    }
    let len = scan_marker(cursor.remaining_slice(), in_block)?;
    Some(cursor.offset() + len)
}
