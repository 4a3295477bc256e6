//! List structure builder.
//!
//! Drives the frame stack from one marker to the next and emits balanced
//! open/close events. One builder handles exactly one list block:
//! [`enter`](ListBuilder::enter) for the first marker,
//! [`advance`](ListBuilder::advance) for every following marker and
//! [`exit`](ListBuilder::exit) at the end of the block.
//!
//! Only the top frame ever has its content wrapper open. Nesting closes the
//! parent's content before the child list opens, so the child list sits
//! inside the parent item but after its content.

use log::{debug, trace};

use crate::Options;

use super::error::Error;
use super::event::ListEvent;
use super::frame::{Frame, FrameStack};
use super::marker::Token;

/// Stack-based transition engine for one list block.
#[derive(Debug)]
pub struct ListBuilder {
    stack: FrameStack,
    wrap_content: bool,
    max_nesting: usize,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    pub fn with_options(options: &Options) -> Self {
        Self {
            stack: FrameStack::new(),
            wrap_content: options.wrap_content,
            max_nesting: options.max_nesting,
        }
    }

    /// Whether every frame has been closed.
    #[inline]
    pub fn is_flushed(&self) -> bool {
        self.stack.is_flushed()
    }

    /// Number of list levels currently open.
    #[inline]
    pub fn open_levels(&self) -> usize {
        self.stack.open_len()
    }

    /// Open the block with its first marker.
    pub fn enter(&mut self, token: &Token, events: &mut Vec<ListEvent>) -> Result<(), Error> {
        debug_assert!(self.is_flushed(), "enter() on a block that is already open");
        let Some(mut frame) = Frame::for_token(token, 1, 1) else {
            return Err(Error::ContinuationOpensBlock);
        };
        self.check_nesting()?;
        trace!("enter depth={} marker={:?}", token.depth, token.marker);

        frame.ordinal = token.explicit_ordinal.unwrap_or(1);
        events.push(ListEvent::ListOpen {
            kind: frame.list,
            start: frame.reported_ordinal(),
        });
        self.open_item(frame, false, events);
        Ok(())
    }

    /// Process the next marker of the block.
    ///
    /// Fails only with [`Error::NestingTooDeep`], in which case nothing has
    /// been emitted and the stack is unchanged.
    pub fn advance(&mut self, token: &Token, events: &mut Vec<ListEvent>) -> Result<(), Error> {
        if self.is_flushed() {
            if token.is_continuation() {
                self.demote(token, events);
                return Ok(());
            }
            debug!("advance() before enter(); opening the block instead");
            return self.enter(token, events);
        }

        let Some(frame) = Frame::for_token(token, 0, 0) else {
            self.continue_paragraph(token, events);
            return Ok(());
        };

        let top_depth = self.stack.top().depth;
        trace!(
            "advance depth={} marker={:?} top_depth={} open={}",
            token.depth,
            token.marker,
            top_depth,
            self.open_levels()
        );

        if token.depth > top_depth {
            self.nest(token, frame, events)
        } else {
            self.replace(token, frame, events);
            Ok(())
        }
    }

    /// Close the block, flushing every open frame.
    pub fn exit(&mut self, events: &mut Vec<ListEvent>) {
        trace!("exit open={}", self.open_levels());
        let mut close_content = true;
        while let Some(frame) = self.stack.pop() {
            if close_content {
                self.close_content(&frame, events);
                close_content = false;
            }
            events.push(ListEvent::ItemClose { kind: frame.item });
            events.push(ListEvent::ListClose { kind: frame.list });
        }
    }

    /// Deeper marker: open a nested list inside the top item.
    fn nest(
        &mut self,
        token: &Token,
        mut frame: Frame,
        events: &mut Vec<ListEvent>,
    ) -> Result<(), Error> {
        self.check_nesting()?;
        let parent = *self.stack.top();
        self.close_content(&parent, events);

        frame.level = parent.level + 1;
        frame.ordinal = token.explicit_ordinal.unwrap_or(1);
        events.push(ListEvent::ListOpen {
            kind: frame.list,
            start: frame.reported_ordinal(),
        });
        self.open_item(frame, false, events);
        Ok(())
    }

    /// Equal or shallower marker: unwind to the marker's depth, then
    /// replace the top item with a sibling.
    fn replace(&mut self, token: &Token, mut frame: Frame, events: &mut Vec<ListEvent>) {
        let popped = self.unwind_to(token.depth, events);
        let Some(prev) = self.stack.pop() else {
            // unwind_to always leaves the bottom frame in place
            return;
        };

        if !popped {
            self.close_content(&prev, events);
        }
        events.push(ListEvent::ItemClose { kind: prev.item });

        let same_list = prev.list == frame.list;
        if !same_list {
            events.push(ListEvent::ListClose { kind: prev.list });
        }

        frame.level = prev.level;
        frame.ordinal = match token.explicit_ordinal {
            Some(n) => n,
            None if same_list => prev.ordinal.saturating_add(1),
            None => 1,
        };

        if !same_list {
            events.push(ListEvent::ListOpen {
                kind: frame.list,
                start: frame.reported_ordinal(),
            });
        }
        let explicit =
            same_list && token.explicit_ordinal.is_some() && frame.reported_ordinal().is_some();
        self.open_item(frame, explicit, events);
    }

    /// `..` marker: start a new paragraph in the enclosing multi-paragraph
    /// item, or fall back to literal text when there is none.
    fn continue_paragraph(&mut self, token: &Token, events: &mut Vec<ListEvent>) {
        let target = self.unwind_target(token.depth).copied();
        let Some(target) = target.filter(|f| f.multi_paragraph) else {
            self.demote(token, events);
            return;
        };

        if self.unwind_to(token.depth, events) {
            // The ancestor's content was closed when its child list opened.
            self.open_content(&target, events);
        } else {
            events.push(ListEvent::ParagraphClose);
            events.push(ListEvent::ParagraphOpen);
        }
    }

    /// Keep a continuation with no multi-paragraph item to continue as text.
    fn demote(&self, token: &Token, events: &mut Vec<ListEvent>) {
        debug!(
            "paragraph continuation at depth {} has no multi-paragraph item; kept as text",
            token.depth
        );
        events.push(ListEvent::Text(token.span));
    }

    /// Pop frames deeper than `depth`, always keeping the bottom frame.
    /// Returns whether anything was popped; the first pop closes the top
    /// item's content.
    fn unwind_to(&mut self, depth: u32, events: &mut Vec<ListEvent>) -> bool {
        let mut popped = false;
        while self.stack.top().depth > depth && self.stack.open_len() > 1 {
            let Some(frame) = self.stack.pop() else { break };
            if !popped {
                self.close_content(&frame, events);
                popped = true;
            }
            events.push(ListEvent::ItemClose { kind: frame.item });
            events.push(ListEvent::ListClose { kind: frame.list });
        }
        popped
    }

    /// The frame that [`unwind_to`](Self::unwind_to) would leave on top.
    fn unwind_target(&self, depth: u32) -> Option<&Frame> {
        let mut remaining = self.stack.open_len();
        for frame in self.stack.iter_open() {
            if frame.depth <= depth || remaining == 1 {
                return Some(frame);
            }
            remaining -= 1;
        }
        None
    }

    fn check_nesting(&self) -> Result<(), Error> {
        if self.stack.open_len() >= self.max_nesting {
            debug!("refusing to open list level {}", self.stack.open_len() + 1);
            return Err(Error::NestingTooDeep {
                limit: self.max_nesting,
            });
        }
        Ok(())
    }

    fn open_item(&mut self, frame: Frame, explicit: bool, events: &mut Vec<ListEvent>) {
        events.push(ListEvent::ItemOpen {
            kind: frame.item,
            level: frame.level,
            ordinal: frame.reported_ordinal(),
            explicit,
        });
        self.open_content(&frame, events);
        self.stack.push(frame);
    }

    fn open_content(&self, frame: &Frame, events: &mut Vec<ListEvent>) {
        if self.wrap_content {
            events.push(ListEvent::ContentOpen { item: frame.item });
        }
        if frame.multi_paragraph {
            events.push(ListEvent::ParagraphOpen);
        }
    }

    fn close_content(&self, frame: &Frame, events: &mut Vec<ListEvent>) {
        if frame.multi_paragraph {
            events.push(ListEvent::ParagraphClose);
        }
        if self.wrap_content {
            events.push(ListEvent::ContentClose { item: frame.item });
        }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ListBuilder {
    fn drop(&mut self) {
        debug_assert!(
            self.is_flushed() || std::thread::panicking(),
            "list builder dropped with {} open levels; exit() was never called",
            self.open_levels()
        );
    }
}
