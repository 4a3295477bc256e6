//! DoS prevention constants.
//!
//! These limits keep pathological input from growing the frame stack
//! or the ordinal parser without bound.

/// Default maximum number of list levels open at once inside one block.
pub const MAX_LIST_NESTING: usize = 32;

/// Maximum digits in an explicit ordinal suffix (`-123456789`).
/// Longer digit runs are left as item text.
pub const MAX_ORDINAL_DIGITS: usize = 9;

/// Frames kept inline before the stack spills to the heap.
pub const INLINE_FRAMES: usize = 8;
