//! Marker interpretation.
//!
//! A raw marker is the indentation prefix of a line followed by one of
//! the list symbols:
//!
//! | marker | meaning                                      |
//! |--------|----------------------------------------------|
//! | `-`    | ordered list item                            |
//! | `*`    | unordered list item                          |
//! | `?`    | description list term                        |
//! | `:`    | description list definition                  |
//! | `--`   | ordered item holding multiple paragraphs     |
//! | `**`   | unordered item holding multiple paragraphs   |
//! | `::`   | definition holding multiple paragraphs       |
//! | `..`   | new paragraph in a `--`, `**` or `::` item   |
//!
//! Ordered markers may carry an explicit number: `-3`, `--12`.

use crate::Range;
use crate::limits::MAX_ORDINAL_DIGITS;

use super::error::Error;
use super::event::{ItemKind, ListKind};

/// Closed set of marker symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Ordered,
    Unordered,
    Term,
    Definition,
    /// `..`: start a new paragraph in the enclosing item.
    Continuation,
}

impl MarkerKind {
    /// List container this marker belongs to. `None` for continuations.
    pub fn list_kind(self) -> Option<ListKind> {
        match self {
            Self::Ordered => Some(ListKind::Ordered),
            Self::Unordered => Some(ListKind::Unordered),
            Self::Term | Self::Definition => Some(ListKind::Description),
            Self::Continuation => None,
        }
    }

    /// Item this marker opens. `None` for continuations.
    pub fn item_kind(self) -> Option<ItemKind> {
        match self {
            Self::Ordered | Self::Unordered => Some(ItemKind::ListItem),
            Self::Term => Some(ItemKind::Term),
            Self::Definition => Some(ItemKind::Definition),
            Self::Continuation => None,
        }
    }
}

/// An interpreted marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Indentation units (two spaces or one tab each), at least 1.
    pub depth: u32,
    pub marker: MarkerKind,
    /// Doubled marker: the item may hold several paragraphs.
    pub multi_paragraph: bool,
    pub explicit_ordinal: Option<u32>,
    /// Source of the marker, used when the token is demoted to text.
    pub span: Range,
}

impl Token {
    /// Build a token without a source span.
    pub fn new(
        depth: u32,
        marker: MarkerKind,
        multi_paragraph: bool,
        explicit_ordinal: Option<u32>,
    ) -> Self {
        Self {
            depth,
            marker,
            multi_paragraph,
            explicit_ordinal,
            span: Range::default(),
        }
    }

    /// Single-paragraph item marker at `depth`.
    pub fn item(depth: u32, marker: MarkerKind) -> Self {
        Self::new(depth, marker, false, None)
    }

    /// Multi-paragraph item marker at `depth`.
    pub fn multi(depth: u32, marker: MarkerKind) -> Self {
        Self::new(depth, marker, true, None)
    }

    /// Paragraph continuation at `depth`.
    pub fn continuation(depth: u32) -> Self {
        Self::new(depth, MarkerKind::Continuation, false, None)
    }

    /// Attach an explicit ordinal.
    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.explicit_ordinal = Some(ordinal);
        self
    }

    /// Attach a source span.
    pub fn with_span(mut self, span: Range) -> Self {
        self.span = span;
        self
    }

    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.marker == MarkerKind::Continuation
    }
}

/// Classify a raw marker (`indentation` + `symbol` + optional digits).
///
/// `span` is what a demoted marker emits as text. It covers `raw` and may
/// start earlier, at the newline in front of the marker. Callers that build
/// markers by hand may pass `Range::default()`.
///
/// # Example
/// ```
/// use listmark::list::{interpret, MarkerKind};
/// use listmark::Range;
///
/// let token = interpret(b"    --4", Range::default()).unwrap();
/// assert_eq!(token.depth, 2);
/// assert_eq!(token.marker, MarkerKind::Ordered);
/// assert!(token.multi_paragraph);
/// assert_eq!(token.explicit_ordinal, Some(4));
/// ```
pub fn interpret(raw: &[u8], span: Range) -> Result<Token, Error> {
    let unrecognized = || Error::UnrecognizedMarker {
        marker: String::from_utf8_lossy(raw).into_owned(),
    };

    let indent_len = raw.iter().take_while(|&&b| b == b' ' || b == b'\t').count();
    let (indent, marker) = raw.split_at(indent_len);

    // Tabs count as one two-space unit.
    let width: usize = indent.iter().map(|&b| if b == b'\t' { 2 } else { 1 }).sum();
    let depth = u32::try_from(width / 2).unwrap_or(u32::MAX);
    if depth == 0 {
        return Err(unrecognized());
    }

    let digit_len = marker
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let (symbol, digits) = marker.split_at(marker.len() - digit_len);

    let (kind, multi_paragraph) = match symbol {
        b"-" => (MarkerKind::Ordered, false),
        b"--" => (MarkerKind::Ordered, true),
        b"*" => (MarkerKind::Unordered, false),
        b"**" => (MarkerKind::Unordered, true),
        b"?" => (MarkerKind::Term, false),
        b":" => (MarkerKind::Definition, false),
        b"::" => (MarkerKind::Definition, true),
        b".." => (MarkerKind::Continuation, false),
        _ => return Err(unrecognized()),
    };

    let explicit_ordinal = if digits.is_empty() {
        None
    } else if kind == MarkerKind::Ordered {
        Some(parse_ordinal(digits).ok_or_else(unrecognized)?)
    } else {
        return Err(unrecognized());
    };

    Ok(Token {
        depth,
        marker: kind,
        multi_paragraph,
        explicit_ordinal,
        span,
    })
}

/// Length of the marker at the start of `rest`, if there is one.
///
/// Continuations are only recognized inside a block. Ordinal digits are
/// part of the marker only when [`interpret`] would accept them; otherwise
/// they stay in the item text.
pub(crate) fn scan_marker(rest: &[u8], in_block: bool) -> Option<usize> {
    let first = *rest.first()?;
    let doubled = rest.get(1) == Some(&first);
    let len = match first {
        b'-' => {
            let symbol = if doubled { 2 } else { 1 };
            symbol + ordinal_len(&rest[symbol..])
        }
        b'*' | b':' => {
            if doubled {
                2
            } else {
                1
            }
        }
        b'?' => 1,
        b'.' if in_block && doubled => 2,
        _ => return None,
    };
    Some(len)
}

fn ordinal_len(rest: &[u8]) -> usize {
    let n = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if n > MAX_ORDINAL_DIGITS || parse_ordinal(&rest[..n]).is_none() {
        0
    } else {
        n
    }
}

fn parse_ordinal(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || digits.len() > MAX_ORDINAL_DIGITS {
        return None;
    }
    let value = digits
        .iter()
        .fold(0u32, |n, &d| n * 10 + u32::from(d - b'0'));
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(raw: &str) -> Token {
        interpret(raw.as_bytes(), Range::default()).unwrap()
    }

    #[test]
    fn test_interpret_symbols() {
        let cases = [
            ("  -", MarkerKind::Ordered, false),
            ("  --", MarkerKind::Ordered, true),
            ("  *", MarkerKind::Unordered, false),
            ("  **", MarkerKind::Unordered, true),
            ("  ?", MarkerKind::Term, false),
            ("  :", MarkerKind::Definition, false),
            ("  ::", MarkerKind::Definition, true),
            ("  ..", MarkerKind::Continuation, false),
        ];
        for (raw, kind, multi) in cases {
            let t = token(raw);
            assert_eq!(t.marker, kind, "{raw:?}");
            assert_eq!(t.multi_paragraph, multi, "{raw:?}");
            assert_eq!(t.depth, 1, "{raw:?}");
            assert_eq!(t.explicit_ordinal, None);
        }
    }

    #[test]
    fn test_interpret_depth_spaces() {
        assert_eq!(token("  *").depth, 1);
        assert_eq!(token("   *").depth, 1);
        assert_eq!(token("    *").depth, 2);
        assert_eq!(token("      *").depth, 3);
    }

    #[test]
    fn test_interpret_depth_tabs() {
        assert_eq!(token("\t*").depth, 1);
        assert_eq!(token("\t\t*").depth, 2);
        assert_eq!(token("\t  *").depth, 2);
    }

    #[test]
    fn test_interpret_ordinal() {
        assert_eq!(token("  -5").explicit_ordinal, Some(5));
        assert_eq!(token("  --12").explicit_ordinal, Some(12));
        assert_eq!(token("  -007").explicit_ordinal, Some(7));
    }

    #[test]
    fn test_interpret_rejects_garbage() {
        let garbage = [
            "  +",
            "  ***",
            "  ?:",
            "  .",
            "-",
            "*",
            "  -0",
            "  *3",
            "  ..2",
            "  -1234567890",
            "",
        ];
        for raw in garbage {
            let err = interpret(raw.as_bytes(), Range::default()).unwrap_err();
            assert!(
                matches!(err, Error::UnrecognizedMarker { .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_interpret_keeps_span() {
        let t = interpret(b"  *", Range::new(10, 13)).unwrap();
        assert_eq!(t.span, Range::new(10, 13));
    }

    #[test]
    fn test_marker_kinds() {
        assert_eq!(MarkerKind::Term.list_kind(), Some(ListKind::Description));
        assert_eq!(
            MarkerKind::Definition.list_kind(),
            Some(ListKind::Description)
        );
        assert_eq!(
            MarkerKind::Definition.item_kind(),
            Some(ItemKind::Definition)
        );
        assert_eq!(MarkerKind::Ordered.item_kind(), Some(ItemKind::ListItem));
        assert_eq!(MarkerKind::Continuation.list_kind(), None);
        assert_eq!(MarkerKind::Continuation.item_kind(), None);
    }

    #[test]
    fn test_scan_marker() {
        assert_eq!(scan_marker(b"* item", false), Some(1));
        assert_eq!(scan_marker(b"** item", false), Some(2));
        assert_eq!(scan_marker(b"*** item", false), Some(2));
        assert_eq!(scan_marker(b"?? item", false), Some(1));
        assert_eq!(scan_marker(b"::x", false), Some(2));
        assert_eq!(scan_marker(b"-3 third", false), Some(2));
        assert_eq!(scan_marker(b"--42x", false), Some(4));
        assert_eq!(scan_marker(b"-0 zero", false), Some(1));
        assert_eq!(scan_marker(b"-1234567890", false), Some(1));
        assert_eq!(scan_marker(b".. more", false), None);
        assert_eq!(scan_marker(b".. more", true), Some(2));
        assert_eq!(scan_marker(b". more", true), None);
        assert_eq!(scan_marker(b"x", true), None);
        assert_eq!(scan_marker(b"", true), None);
    }

    #[test]
    fn test_scanned_markers_interpret() {
        let lines = ["  -9 x", "  --123456789 y", "  ** z", "\t? t", "\t\t:: d", "  .. p"];
        for line in lines {
            let indent = line
                .bytes()
                .take_while(|&b| b == b' ' || b == b'\t')
                .count();
            let len = scan_marker(&line.as_bytes()[indent..], true).unwrap();
            let raw = &line.as_bytes()[..indent + len];
            assert!(interpret(raw, Range::default()).is_ok(), "{line:?}");
        }
    }
}
