//! Mutable, position-addressed token stream.

use std::fmt;
use std::ops::Index;

use super::{BlockType, Token, TokenKind};
use crate::TokensError;

/// Ordered token stream for one source unit.
///
/// Wraps `Vec<Token>` with the navigation and in-place editing operations
/// fixers need. Alongside the tokens it keeps a per-kind counter array, so
/// [`Tokens::is_token_kind_found`] is O(1). Every mutation goes through
/// [`Tokens::insert_at`] or [`Tokens::set_at`], which keep the counters in
/// sync and mark the stream as changed.
///
/// Positions are plain `usize` indices. An insertion shifts every later
/// position by one; callers holding indices past the insertion point must
/// recompute or adjust them.
#[derive(Clone, Default)]
pub struct Tokens {
    tokens: Vec<Token>,
    /// `kind_counts[k.index()]` is the number of tokens of kind `k`.
    kind_counts: [usize; TokenKind::COUNT],
    changed: bool,
}

// Only the token sequence matters for equality; `changed` is edit history.
impl PartialEq for Tokens {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}
impl Eq for Tokens {}

impl Tokens {
    /// Create a new empty stream.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a Vec of tokens. The new stream is unchanged.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let mut kind_counts = [0; TokenKind::COUNT];
        for token in &tokens {
            kind_counts[token.kind().index()] += 1;
        }
        Tokens {
            tokens,
            kind_counts,
            changed: false,
        }
    }

    /// Append a token while building the stream. Does not mark it changed.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.kind_counts[token.kind().index()] += 1;
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Whether any token of `kind` exists in the stream.
    #[inline]
    pub fn is_token_kind_found(&self, kind: TokenKind) -> bool {
        self.kind_counts[kind.index()] > 0
    }

    /// Number of tokens of `kind` in the stream.
    #[inline]
    pub fn count_of_kind(&self, kind: TokenKind) -> usize {
        self.kind_counts[kind.index()]
    }

    /// Whether the stream was edited since it was built.
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    // ─── Navigation ─────────────────────────────────────────────────

    /// Index of the first token after `index` matching `predicate`.
    fn next_matching(&self, index: usize, predicate: impl Fn(&Token) -> bool) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|&(_, token)| predicate(token))
            .map(|(i, _)| i)
    }

    /// Next token after `index` that is neither whitespace nor a comment.
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        self.next_matching(index, Token::is_meaningful)
    }

    /// Next token after `index` that is not whitespace. Comments count.
    pub fn next_non_whitespace(&self, index: usize) -> Option<usize> {
        self.next_matching(index, |token| !token.is_whitespace())
    }

    /// Next token after `index` of the given kind.
    pub fn next_token_of_kind(&self, index: usize, kind: TokenKind) -> Option<usize> {
        self.next_matching(index, |token| token.is_kind(kind))
    }

    /// Index of the delimiter closing the block opened at `start`.
    ///
    /// Matching is by nesting depth: every opening delimiter of the same
    /// block type deepens, every closing one returns a level, and the match
    /// is the close that brings the depth back to zero. Delimiters of other
    /// block types are ignored.
    pub fn find_block_end(&self, block: BlockType, start: usize) -> Result<usize, TokensError> {
        if !self.get(start).is_some_and(|token| token.is_kind(block.open())) {
            return Err(TokensError::NotBlockStart {
                index: start,
                block,
            });
        }

        let mut depth = 0usize;
        for (index, token) in self.tokens.iter().enumerate().skip(start) {
            if token.is_kind(block.open()) {
                depth += 1;
            } else if token.is_kind(block.close()) {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
        }

        Err(TokensError::UnclosedBlock { start, block })
    }

    // ─── Mutation ───────────────────────────────────────────────────

    /// Insert `token` at `index`, shifting later tokens right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_at(&mut self, index: usize, token: Token) {
        self.kind_counts[token.kind().index()] += 1;
        self.tokens.insert(index, token);
        self.changed = true;
    }

    /// Replace the token at `index`. Replacing a token with an identical one
    /// is not a change.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_at(&mut self, index: usize, token: Token) {
        let slot = &mut self.tokens[index];
        if *slot == token {
            return;
        }
        self.kind_counts[slot.kind().index()] -= 1;
        self.kind_counts[token.kind().index()] += 1;
        *slot = token;
        self.changed = true;
    }

    /// Make sure there is a whitespace token with content `whitespace` at
    /// `index`, or at `index + offset` when `index` is not whitespace.
    ///
    /// If the token at `index` is whitespace, its content is replaced and no
    /// token is inserted. Otherwise a new whitespace token is inserted at
    /// `index + offset`: offset `0` places it before the token at `index`,
    /// offset `1` after it.
    ///
    /// Returns `true` when a token was inserted.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn ensure_whitespace_at_index(&mut self, index: usize, offset: usize, whitespace: &str) -> bool {
        if self.tokens[index].is_whitespace() {
            self.set_at(index, Token::whitespace(whitespace));
            return false;
        }

        self.insert_at(index + offset, Token::whitespace(whitespace));
        true
    }

    // ─── Serialization ──────────────────────────────────────────────

    /// Source text of the stream: every token's content, in order.
    pub fn generate_code(&self) -> String {
        let mut code = String::with_capacity(self.tokens.iter().map(|t| t.content().len()).sum());
        for token in &self.tokens {
            code.push_str(token.content());
        }
        code
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens::from_vec(iter.into_iter().collect())
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.content())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}
