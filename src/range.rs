//! Compact byte spans into the source document.
//!
//! Marker and text events refer back into the input instead of owning
//! copies, so a whole document's event vector stays small.

/// Byte span into an input buffer.
///
/// # Example
/// ```
/// use listmark::Range;
///
/// let input = b"  * item";
/// let marker = Range::new(0, 3);
/// assert_eq!(marker.slice(input), b"  *");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if either offset exceeds `u32::MAX`.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The bytes this range covers.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }

    /// Lossy UTF-8 view, for diagnostics.
    pub fn to_string_lossy(&self, input: &[u8]) -> String {
        String::from_utf8_lossy(self.slice(input)).into_owned()
    }
}
