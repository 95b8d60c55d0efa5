//! Oyova Tokens
//!
//! The token stream that Oyova fixers read and edit in place.
//!
//! Tokenizing source text is the host's job: a host builds a [`Tokens`]
//! stream from already-classified [`Token`]s, hands it to fixers, and turns
//! it back into text with [`Tokens::generate_code`].
//!
//! # Design Philosophy
//!
//! - **Positions, not trees**: a stream is a flat `Vec` addressed by index;
//!   paired delimiters are matched on demand, never cached.
//! - **Closed kinds**: [`TokenKind`] is a fieldless enum; context-sensitive
//!   classification (closure `use`) is resolved before fixers run.
//! - **Counted kinds**: the stream keeps per-kind counts current across
//!   edits, so "does this stream contain X" is O(1).

mod error;
mod token;

#[cfg(any(test, feature = "fixture"))]
pub mod fixture;

pub use error::TokensError;
pub use token::{BlockType, Token, TokenKind, Tokens};
