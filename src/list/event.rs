//! List event types.

use crate::Range;

/// Kind of list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Numbered list (`-` markers).
    Ordered,
    /// Bullet list (`*` markers).
    Unordered,
    /// Description list holding terms (`?`) and definitions (`:`).
    Description,
}

/// Kind of item inside a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Item of an ordered or unordered list.
    ListItem,
    /// Description list term.
    Term,
    /// Description list definition.
    Definition,
}

/// Events emitted by the list builder.
///
/// Every `*Open` is matched by exactly one later `*Close`, and closes
/// arrive in reverse order of opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Start of a list.
    ListOpen {
        kind: ListKind,
        /// First ordinal, for ordered lists only.
        start: Option<u32>,
    },
    /// End of a list.
    ListClose { kind: ListKind },

    /// Start of an item.
    ItemOpen {
        kind: ItemKind,
        /// 1-based nesting level within the block.
        level: u32,
        /// Item number, for ordered lists only.
        ordinal: Option<u32>,
        /// Whether the number came from the marker itself (`-7`) rather
        /// than from auto-increment. Always false for the first item of
        /// a list, whose number is carried by `ListOpen::start`.
        explicit: bool,
    },
    /// End of an item.
    ItemClose { kind: ItemKind },

    /// Start of an item's content wrapper.
    ContentOpen { item: ItemKind },
    /// End of an item's content wrapper.
    ContentClose { item: ItemKind },

    /// Start of a paragraph inside a multi-paragraph item.
    ParagraphOpen,
    /// End of a paragraph inside a multi-paragraph item.
    ParagraphClose,

    /// Literal text, to be escaped by the renderer.
    Text(Range),
}

impl ListEvent {
    /// `+1` for opening events, `-1` for closing events, `0` for text.
    pub fn nesting_delta(&self) -> i32 {
        match self {
            Self::ListOpen { .. }
            | Self::ItemOpen { .. }
            | Self::ContentOpen { .. }
            | Self::ParagraphOpen => 1,
            Self::ListClose { .. }
            | Self::ItemClose { .. }
            | Self::ContentClose { .. }
            | Self::ParagraphClose => -1,
            Self::Text(_) => 0,
        }
    }

    /// Whether `close` is the closing counterpart of `self`.
    pub fn is_closed_by(&self, close: &ListEvent) -> bool {
        match (self, close) {
            (Self::ListOpen { kind: a, .. }, Self::ListClose { kind: b }) => a == b,
            (Self::ItemOpen { kind: a, .. }, Self::ItemClose { kind: b }) => a == b,
            (Self::ContentOpen { item: a }, Self::ContentClose { item: b }) => a == b,
            (Self::ParagraphOpen, Self::ParagraphClose) => true,
            _ => false,
        }
    }
}

/// Check that `events` form a well-nested tag tree with nothing left open.
pub fn is_balanced(events: &[ListEvent]) -> bool {
    let mut open: Vec<&ListEvent> = Vec::new();
    for event in events {
        match event.nesting_delta() {
            1 => open.push(event),
            -1 => match open.pop() {
                Some(opener) if opener.is_closed_by(event) => {}
                _ => return false,
            },
            _ => {}
        }
    }
    open.is_empty()
}
