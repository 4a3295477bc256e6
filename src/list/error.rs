//! Errors raised while building list structure.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The marker interpreter was handed something the lexer should never
    /// have matched. Indicates a lexer bug, not bad user input.
    #[error("unrecognized list marker {marker:?}")]
    UnrecognizedMarker { marker: String },

    /// A paragraph continuation (`..`) was used to open a block.
    #[error("paragraph continuation cannot open a list block")]
    ContinuationOpensBlock,

    /// Opening another level would exceed the configured nesting limit.
    #[error("list nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl Error {
    /// Grammar violations are lexer/caller bugs; the nesting limit is a
    /// property of the document that a caller may choose to work around.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::NestingTooDeep { .. })
    }
}
