//! List structure for indentation-tagged list markers.
//!
//! The pieces, leaves first:
//! - [`interpret`] classifies a raw marker into a [`Token`]
//! - [`FrameStack`] holds one frame per open list level
//! - [`ListBuilder`] turns tokens into balanced [`ListEvent`]s
//! - [`ListParser`] runs a whole document through the lexer and builder

mod builder;
mod error;
mod event;
mod frame;
mod marker;
mod parser;

pub use builder::ListBuilder;
pub use error::Error;
pub use event::{ItemKind, ListEvent, ListKind, is_balanced};
pub use frame::{Frame, FrameStack};
pub use marker::{MarkerKind, Token, interpret};
pub use parser::ListParser;

pub(crate) use marker::scan_marker;
