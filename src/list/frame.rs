//! Stack of open list levels.

use smallvec::SmallVec;

use crate::limits::INLINE_FRAMES;

use super::event::{ItemKind, ListKind};
use super::marker::Token;

/// One open list + item pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Indentation depth the item was opened at.
    pub depth: u32,
    /// 1-based nesting level; 0 for the root sentinel.
    pub level: u32,
    pub list: ListKind,
    pub item: ItemKind,
    pub multi_paragraph: bool,
    /// Current item number; meaningful for ordered lists only.
    pub ordinal: u32,
}

impl Frame {
    /// Sits below the first real frame. Depth 0 is shallower than any token.
    const ROOT: Frame = Frame {
        depth: 0,
        level: 0,
        list: ListKind::Unordered,
        item: ItemKind::ListItem,
        multi_paragraph: false,
        ordinal: 0,
    };

    /// Frame for an item marker. Returns `None` for continuations.
    pub fn for_token(token: &Token, level: u32, ordinal: u32) -> Option<Self> {
        Some(Self {
            depth: token.depth,
            level,
            list: token.marker.list_kind()?,
            item: token.marker.item_kind()?,
            multi_paragraph: token.multi_paragraph,
            ordinal,
        })
    }

    /// Ordinal to report in events.
    #[inline]
    pub fn reported_ordinal(&self) -> Option<u32> {
        (self.list == ListKind::Ordered).then_some(self.ordinal)
    }
}

/// Frames ordered by non-decreasing depth, root sentinel at the bottom.
#[derive(Debug)]
pub struct FrameStack {
    frames: SmallVec<[Frame; INLINE_FRAMES]>,
}

impl FrameStack {
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame::ROOT);
        Self { frames }
    }

    /// Topmost frame; the sentinel when no list is open.
    #[inline]
    pub fn top(&self) -> &Frame {
        // The sentinel is never popped.
        &self.frames[self.frames.len() - 1]
    }

    /// Number of real frames.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.frames.len() - 1
    }

    #[inline]
    pub fn is_flushed(&self) -> bool {
        self.open_len() == 0
    }

    pub fn push(&mut self, frame: Frame) {
        debug_assert!(frame.depth >= 1, "real frames have depth >= 1");
        self.frames.push(frame);
    }

    /// Pop the top real frame. Never removes the sentinel.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.is_flushed() {
            return None;
        }
        self.frames.pop()
    }

    /// Real frames from the top down.
    pub fn iter_open(&self) -> impl Iterator<Item = &Frame> {
        self.frames[1..].iter().rev()
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}
