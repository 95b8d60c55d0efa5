//! Token kinds.

/// Kind tag for a [`Token`](super::Token).
///
/// The tokenizer resolves context-sensitive kinds before the stream reaches a
/// fixer: in particular, the `use` keyword that introduces a closure's
/// captured-variable list is tagged [`TokenKind::UseLambda`], distinct from
/// an import `use` (which is a plain [`TokenKind::Keyword`]).
///
/// Discriminants are dense so a kind can index a per-kind counter array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// `<?php`
    OpenTag = 0,
    /// `$name`
    Variable = 1,
    /// Bare identifier: function, class, constant names.
    Identifier = 2,
    /// Reserved word: `function`, `return`, `class`, ...
    Keyword = 3,
    /// `use` introducing a closure capture list: `function () use ($x) {}`
    UseLambda = 4,
    /// String or numeric literal.
    Literal = 5,
    /// Operators and separators: `,`, `;`, `=`, `->`, ...
    Punct = 6,

    /// `(`
    OpenParen = 7,
    /// `)`
    CloseParen = 8,
    /// `{`
    OpenBrace = 9,
    /// `}`
    CloseBrace = 10,
    /// `[`
    OpenBracket = 11,
    /// `]`
    CloseBracket = 12,

    /// Run of spaces, tabs and newlines.
    Whitespace = 13,
    /// `// ...`, `# ...` or `/* ... */`
    Comment = 14,
    /// `/** ... */`
    DocComment = 15,

    /// Anything the tokenizer does not classify further.
    Other = 16,
}

impl TokenKind {
    /// Number of kinds. Sizes per-kind lookup tables.
    pub const COUNT: usize = 17;

    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::OpenTag,
        TokenKind::Variable,
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::UseLambda,
        TokenKind::Literal,
        TokenKind::Punct,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::DocComment,
        TokenKind::Other,
    ];

    /// Dense index of this kind, `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed source text for kinds that always have the same lexeme.
    ///
    /// Returns `None` for kinds with variable content.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenBrace => Some("{"),
            TokenKind::CloseBrace => Some("}"),
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
            TokenKind::UseLambda => Some("use"),
            _ => None,
        }
    }

    /// Whitespace or comment: tokens a parser would skip.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }

    /// Opening delimiter of any block type.
    #[inline]
    pub const fn is_open_delim(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen | TokenKind::OpenBrace | TokenKind::OpenBracket
        )
    }

    /// Closing delimiter of any block type.
    #[inline]
    pub const fn is_close_delim(self) -> bool {
        matches!(
            self,
            TokenKind::CloseParen | TokenKind::CloseBrace | TokenKind::CloseBracket
        )
    }
}
