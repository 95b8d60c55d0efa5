//! Tokens and the mutable token stream.
//!
//! A [`Token`] is a kind tag plus its literal source text. Position in the
//! owning [`Tokens`] stream is the only addressing mechanism; tokens carry no
//! spans, so inserting a token never invalidates the others' contents.

mod block;
mod kind;
mod list;

pub use block::BlockType;
pub use kind::TokenKind;
pub use list::Tokens;

use std::fmt;

/// A token and its literal source text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    content: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Token {
            kind,
            content: content.into(),
        }
    }

    /// Create a token whose content is fixed by its kind, e.g. `(`.
    ///
    /// Returns `None` for kinds without a fixed lexeme.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        kind.lexeme().map(|text| Token::new(kind, text))
    }

    /// Create a whitespace token.
    #[inline]
    pub fn whitespace(content: impl Into<String>) -> Self {
        Token::new(TokenKind::Whitespace, content)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Whitespace token made only of characters from `allowed`.
    ///
    /// `is_whitespace_of(" \t")` is the single-line whitespace check: a run
    /// containing a newline does not qualify.
    pub fn is_whitespace_of(&self, allowed: &str) -> bool {
        self.is_whitespace() && self.content.chars().all(|c| allowed.contains(c))
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    /// Neither whitespace nor a comment.
    #[inline]
    pub fn is_meaningful(&self) -> bool {
        !self.kind.is_trivia()
    }

    #[inline]
    pub fn contains_newline(&self) -> bool {
        self.content.contains('\n')
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.content)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
