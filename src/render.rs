//! Output writer and renderer profiles.
//!
//! A renderer maps each [`ListEvent`] to literal output on its own; it
//! keeps no state between events, so rendering the same events twice
//! always yields the same text.

pub mod html;
pub mod latex;

use crate::escape;
use crate::list::ListEvent;

/// Target markup language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Html,
    Latex,
}

impl Format {
    /// Render one event.
    #[inline]
    pub fn render_event(self, input: &[u8], event: &ListEvent, writer: &mut Writer) {
        match self {
            Self::Html => html::render_event(input, event, writer),
            Self::Latex => latex::render_event(input, event, writer),
        }
    }

    /// Render a sequence of events in order.
    pub fn render_events(self, input: &[u8], events: &[ListEvent], writer: &mut Writer) {
        for event in events {
            self.render_event(input, event, writer);
        }
    }
}

/// Output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use listmark::Writer;
///
/// let mut writer = Writer::with_capacity_for(100);
/// writer.write_str("<li>");
/// writer.write_escaped_html(b"a < b");
/// writer.write_str("</li>");
/// assert_eq!(writer.into_string(), "<li>a &lt; b</li>");
/// ```
pub struct Writer {
    out: Vec<u8>,
}

impl Writer {
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with capacity based on expected input size.
    ///
    /// List markup roughly doubles in size once tags are added.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len * 2),
        }
    }

    /// Wrap an existing buffer, keeping its allocation.
    #[inline]
    pub fn from_vec(mut out: Vec<u8>) -> Self {
        out.clear();
        Self { out }
    }

    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_html(&mut self, text: &[u8]) {
        escape::escape_html_into(&mut self.out, text);
    }

    /// Write text with LaTeX escaping.
    #[inline]
    pub fn write_escaped_latex(&mut self, text: &[u8]) {
        escape::escape_latex_into(&mut self.out, text);
    }

    /// Write a u32 as decimal.
    pub fn write_u32(&mut self, mut n: u32) {
        if n == 0 {
            self.write_byte(b'0');
            return;
        }

        let mut buf = [0u8; 10];
        let mut i = buf.len();
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        self.write_bytes(&buf[i..]);
    }

    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String.
    ///
    /// Text spans always split the input at ASCII bytes, so output built
    /// from a `&str` is valid UTF-8; anything else is replaced lossily.
    pub fn into_string(self) -> String {
        String::from_utf8(self.out)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
