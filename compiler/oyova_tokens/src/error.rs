//! Errors raised by token stream navigation.

use crate::{BlockType, TokenKind};

/// A token stream did not satisfy a structural precondition.
///
/// Tokenizers hand fixers balanced streams, so these indicate a contract
/// breach upstream rather than a condition a fixer can recover from.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokensError {
    /// The token at `index` does not open a `block`.
    #[error("token {index} does not open a {block:?} block")]
    NotBlockStart { index: usize, block: BlockType },

    /// The `block` opened at `start` is never closed.
    #[error("unbalanced {block:?} block opened at token {start}")]
    UnclosedBlock { start: usize, block: BlockType },

    /// No token of `kind` follows position `after`.
    #[error("expected a {kind:?} token after token {after}")]
    MissingToken { kind: TokenKind, after: usize },
}
