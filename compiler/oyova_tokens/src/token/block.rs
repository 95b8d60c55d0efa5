//! Paired-delimiter block types.

use super::TokenKind;

/// Kind of delimiter pair recognized by [`Tokens::find_block_end`](super::Tokens::find_block_end).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `( ... )`
    Parenthesis,
    /// `{ ... }`
    CurlyBrace,
    /// `[ ... ]`
    SquareBrace,
}

impl BlockType {
    #[inline]
    pub const fn open(self) -> TokenKind {
        match self {
            BlockType::Parenthesis => TokenKind::OpenParen,
            BlockType::CurlyBrace => TokenKind::OpenBrace,
            BlockType::SquareBrace => TokenKind::OpenBracket,
        }
    }

    #[inline]
    pub const fn close(self) -> TokenKind {
        match self {
            BlockType::Parenthesis => TokenKind::CloseParen,
            BlockType::CurlyBrace => TokenKind::CloseBrace,
            BlockType::SquareBrace => TokenKind::CloseBracket,
        }
    }

    /// Block type opened by `kind`, if it is an opening delimiter.
    pub const fn opened_by(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::OpenParen => Some(BlockType::Parenthesis),
            TokenKind::OpenBrace => Some(BlockType::CurlyBrace),
            TokenKind::OpenBracket => Some(BlockType::SquareBrace),
            _ => None,
        }
    }
}
