//! `SpaceInsideParenthesisFixer`: one space inside non-empty parentheses.
//!
//! # Rule
//!
//! There MUST be a space after an opening parenthesis and a space before the
//! closing parenthesis:
//!
//! ```text
//! function foo($bar, $foo)      ->  function foo( $bar, $foo )
//! function () use($x) {}        ->  function () use( $x ) {}
//! ```
//!
//! Empty pairs stay empty, and an edge whose neighbouring token contains a
//! newline is left alone, so multi-line argument lists keep their layout.
//!
//! # Traversal
//!
//! Every `(` in the stream is visited in position order, including `(`s
//! nested inside other pairs. All edits for the pair opened at `i` land at
//! positions after `i`, so a forward cursor over the growing stream never
//! skips or revisits a token.
//!
//! A closure's capture list is a sibling of its parameter list, not a
//! descendant: `function ($a) use ($b)`. When a parameter list is directly
//! followed by the closure `use` introducer, the capture-list pair is fixed
//! together with it.

use std::path::Path;

use oyova_tokens::{BlockType, Token, TokenKind, Tokens, TokensError};
use tracing::{debug, trace};

use crate::text::str_contains;
use crate::{CodeSample, FixError, Fixer, FixerDefinition};

/// Whitespace that may sit inside a parenthesis edge without a newline.
pub const SINGLE_LINE_WHITESPACE: &str = " \t";

/// Whitespace the fixer places at an edge.
pub const EDGE_WHITESPACE: &str = " ";

static DEFINITION: FixerDefinition = FixerDefinition {
    summary: "There MUST be a space after the opening parenthesis and a space before the closing parenthesis.",
    samples: &[CodeSample::new(
        "<?php

class Foo
{
    public static function bar( $foo, $bar )
    {
        return false;
    }
}

function foo( $bar, $foo )
{
    return false;
}
",
    )],
};

/// Options for [`SpaceInsideParenthesisFixer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SpaceInsideParenthesisConfig {
    /// Rewrite existing single-line edge whitespace (tabs, several spaces)
    /// to exactly one space. Off by default: any single-line run is accepted
    /// as is.
    pub collapse_existing: bool,
}

/// Ensures one space inside each non-empty, single-line parenthesis edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpaceInsideParenthesisFixer {
    config: SpaceInsideParenthesisConfig,
}

impl SpaceInsideParenthesisFixer {
    pub const fn new(config: SpaceInsideParenthesisConfig) -> Self {
        SpaceInsideParenthesisFixer { config }
    }

    pub fn config(&self) -> SpaceInsideParenthesisConfig {
        self.config
    }

    /// Fix every pair in the stream.
    fn fix_pairs(&self, tokens: &mut Tokens) -> Result<(), TokensError> {
        let mut pairs = 0usize;
        let mut edits = 0usize;

        let mut index = 0;
        while index < tokens.len() {
            if !tokens[index].is_kind(TokenKind::OpenParen) || is_empty_pair(tokens, index) {
                index += 1;
                continue;
            }

            let end = tokens.find_block_end(BlockType::Parenthesis, index)?;

            // The capture list sits after `end`: fixing it first leaves
            // `index` and `end` valid for the parameter list.
            if let Some((use_start, use_end)) = capture_list_after(tokens, end)? {
                debug!(params = index, captures = use_start, "closure capture list");
                edits += self.fix_inner_edges(tokens, use_start, use_end);
                pairs += 1;
            }

            edits += self.fix_inner_edges(tokens, index, end);
            pairs += 1;
            index += 1;
        }

        debug!(pairs, edits, "space inside parenthesis pass done");
        Ok(())
    }

    /// Normalize both inner edges of the pair `(start, end)`. Returns the
    /// number of edits made.
    ///
    /// The closing edge goes first: an insertion before `end` does not move
    /// `start`.
    fn fix_inner_edges(&self, tokens: &mut Tokens, start: usize, end: usize) -> usize {
        let mut edits = 0;

        match self.edge_edit(&tokens[end - 1]) {
            EdgeEdit::Keep => {}
            EdgeEdit::Insert => {
                trace!(at = end, "space before `)`");
                tokens.ensure_whitespace_at_index(end, 0, EDGE_WHITESPACE);
                edits += 1;
            }
            EdgeEdit::Collapse => {
                trace!(at = end - 1, "collapse whitespace before `)`");
                tokens.ensure_whitespace_at_index(end - 1, 0, EDGE_WHITESPACE);
                edits += 1;
            }
        }

        match self.edge_edit(&tokens[start + 1]) {
            EdgeEdit::Keep => {}
            EdgeEdit::Insert => {
                trace!(at = start + 1, "space after `(`");
                tokens.ensure_whitespace_at_index(start, 1, EDGE_WHITESPACE);
                edits += 1;
            }
            EdgeEdit::Collapse => {
                trace!(at = start + 1, "collapse whitespace after `(`");
                tokens.ensure_whitespace_at_index(start + 1, 1, EDGE_WHITESPACE);
                edits += 1;
            }
        }

        edits
    }

    /// What to do with the token inside a parenthesis edge.
    fn edge_edit(&self, neighbour: &Token) -> EdgeEdit {
        if neighbour.is_whitespace_of(SINGLE_LINE_WHITESPACE) {
            if self.config.collapse_existing && neighbour.content() != EDGE_WHITESPACE {
                EdgeEdit::Collapse
            } else {
                EdgeEdit::Keep
            }
        } else if str_contains(neighbour.content(), "\n") {
            EdgeEdit::Keep
        } else {
            EdgeEdit::Insert
        }
    }
}

/// Edit decided for one parenthesis edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeEdit {
    /// Already single-line whitespace, or multi-line content.
    Keep,
    /// Insert one space between the delimiter and its neighbour.
    Insert,
    /// Replace the neighbouring single-line run with one space.
    Collapse,
}

impl Fixer for SpaceInsideParenthesisFixer {
    fn definition(&self) -> FixerDefinition {
        DEFINITION
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.is_token_kind_found(TokenKind::OpenParen)
    }

    fn apply_fix(&self, path: &Path, tokens: &mut Tokens) -> Result<(), FixError> {
        self.fix_pairs(tokens)
            .map_err(|source| FixError::new(self.name(), path, source))
    }
}

/// The pair opened at `open` has nothing but trivia inside: `()`, `( )`,
/// `( /* none */ )`.
fn is_empty_pair(tokens: &Tokens, open: usize) -> bool {
    tokens
        .next_meaningful(open)
        .is_some_and(|next| tokens[next].is_kind(TokenKind::CloseParen))
}

/// The non-empty closure capture-list pair following the parameter list
/// closed at `params_end`, if any.
///
/// The introducer must be the first non-whitespace token after the
/// parameter list, and the capture list's `(` the first meaningful token
/// after the introducer.
fn capture_list_after(
    tokens: &Tokens,
    params_end: usize,
) -> Result<Option<(usize, usize)>, TokensError> {
    let Some(introducer) = tokens.next_non_whitespace(params_end) else {
        return Ok(None);
    };
    if !tokens[introducer].is_kind(TokenKind::UseLambda) {
        return Ok(None);
    }

    let start = tokens
        .next_meaningful(introducer)
        .filter(|&next| tokens[next].is_kind(TokenKind::OpenParen))
        .ok_or(TokensError::MissingToken {
            kind: TokenKind::OpenParen,
            after: introducer,
        })?;
    if is_empty_pair(tokens, start) {
        return Ok(None);
    }

    let end = tokens.find_block_end(BlockType::Parenthesis, start)?;
    Ok(Some((start, end)))
}
