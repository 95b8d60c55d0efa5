use super::*;
use crate::fixture::tokenize;
use crate::TokensError;
use pretty_assertions::assert_eq;

// === Token ===

#[test]
fn single_line_whitespace_class() {
    assert!(Token::whitespace(" ").is_whitespace_of(" \t"));
    assert!(Token::whitespace("\t  ").is_whitespace_of(" \t"));
    assert!(!Token::whitespace(" \n ").is_whitespace_of(" \t"));
    // Content matters only for whitespace tokens.
    assert!(!Token::new(TokenKind::Other, " ").is_whitespace_of(" \t"));
}

#[test]
fn meaningful_excludes_trivia() {
    assert!(!Token::whitespace(" ").is_meaningful());
    assert!(!Token::new(TokenKind::Comment, "// x").is_meaningful());
    assert!(!Token::new(TokenKind::DocComment, "/** x */").is_meaningful());
    assert!(Token::new(TokenKind::Variable, "$x").is_meaningful());
    assert!(Token::new(TokenKind::DocComment, "/** x */").is_comment());
}

#[test]
fn newline_detection_covers_any_kind() {
    assert!(Token::whitespace("\n  ").contains_newline());
    assert!(Token::new(TokenKind::Literal, "'a\nb'").contains_newline());
    assert!(!Token::new(TokenKind::Comment, "/* a */").contains_newline());
}

#[test]
fn from_kind_uses_fixed_lexeme() {
    assert_eq!(Token::from_kind(TokenKind::OpenParen).unwrap().content(), "(");
    assert_eq!(Token::from_kind(TokenKind::UseLambda).unwrap().content(), "use");
    assert!(Token::from_kind(TokenKind::Variable).is_none());
}

#[test]
fn kind_indices_are_dense() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn block_type_delimiters() {
    for block in [BlockType::Parenthesis, BlockType::CurlyBrace, BlockType::SquareBrace] {
        assert!(block.open().is_open_delim());
        assert!(block.close().is_close_delim());
        assert_eq!(BlockType::opened_by(block.open()), Some(block));
    }
    assert_eq!(BlockType::opened_by(TokenKind::CloseParen), None);
}

// === Kind index ===

#[test]
fn kind_found_tracks_edits() {
    let mut tokens = tokenize("$a");
    assert!(!tokens.is_token_kind_found(TokenKind::OpenParen));

    tokens.insert_at(0, Token::from_kind(TokenKind::OpenParen).unwrap());
    assert!(tokens.is_token_kind_found(TokenKind::OpenParen));
    assert_eq!(tokens.count_of_kind(TokenKind::OpenParen), 1);

    tokens.set_at(0, Token::whitespace(" "));
    assert!(!tokens.is_token_kind_found(TokenKind::OpenParen));
    assert_eq!(tokens.count_of_kind(TokenKind::Whitespace), 1);
}

#[test]
fn from_vec_is_unchanged() {
    let tokens = tokenize("foo($a)");
    assert!(!tokens.is_changed());
    assert_eq!(tokens.count_of_kind(TokenKind::OpenParen), 1);
}

#[test]
fn identical_set_is_not_a_change() {
    let mut tokens = tokenize("( $a )");
    tokens.set_at(1, Token::whitespace(" "));
    assert!(!tokens.is_changed());
    tokens.set_at(1, Token::whitespace("  "));
    assert!(tokens.is_changed());
}

// === Navigation ===

#[test]
fn next_meaningful_skips_comments() {
    let tokens = tokenize("( /* c */ )");
    assert_eq!(tokens.next_meaningful(0), Some(4));
    assert_eq!(tokens.next_non_whitespace(0), Some(2));
    assert_eq!(tokens.next_meaningful(4), None);
}

#[test]
fn next_token_of_kind() {
    let tokens = tokenize("use ($x)");
    assert_eq!(tokens.next_token_of_kind(0, TokenKind::OpenParen), Some(2));
    assert_eq!(tokens.next_token_of_kind(2, TokenKind::OpenParen), None);
}

#[test]
fn block_end_respects_nesting() {
    // 0 1  2 3  4 5 6 7 8
    // f (  g (  ) , ( ) )
    let tokens = tokenize("f(g(),())");
    assert_eq!(tokens.find_block_end(BlockType::Parenthesis, 1), Ok(8));
    assert_eq!(tokens.find_block_end(BlockType::Parenthesis, 3), Ok(4));
    assert_eq!(tokens.find_block_end(BlockType::Parenthesis, 6), Ok(7));
}

#[test]
fn block_end_ignores_other_block_types() {
    let tokens = tokenize("[(])");
    assert_eq!(tokens.find_block_end(BlockType::Parenthesis, 1), Ok(3));
    assert_eq!(tokens.find_block_end(BlockType::SquareBrace, 0), Ok(2));
}

#[test]
fn block_end_errors() {
    let tokens = tokenize("f(g()");
    assert_eq!(
        tokens.find_block_end(BlockType::Parenthesis, 1),
        Err(TokensError::UnclosedBlock {
            start: 1,
            block: BlockType::Parenthesis,
        })
    );
    assert_eq!(
        tokens.find_block_end(BlockType::Parenthesis, 0),
        Err(TokensError::NotBlockStart {
            index: 0,
            block: BlockType::Parenthesis,
        })
    );
    assert_eq!(
        tokens.find_block_end(BlockType::CurlyBrace, 99),
        Err(TokensError::NotBlockStart {
            index: 99,
            block: BlockType::CurlyBrace,
        })
    );
}

// === Mutation ===

#[test]
fn ensure_whitespace_inserts_before_and_after() {
    let mut tokens = tokenize("($a)");
    // Before `)`.
    assert!(tokens.ensure_whitespace_at_index(2, 0, " "));
    // After `(`.
    assert!(tokens.ensure_whitespace_at_index(0, 1, " "));
    assert_eq!(tokens.generate_code(), "( $a )");
    assert!(tokens.is_changed());
}

#[test]
fn ensure_whitespace_replaces_existing_run() {
    let mut tokens = tokenize("(\t$a)");
    assert!(!tokens.ensure_whitespace_at_index(1, 1, " "));
    assert_eq!(tokens.generate_code(), "( $a)");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn display_matches_generate_code() {
    let tokens = tokenize("<?php foo( $a );");
    assert_eq!(tokens.to_string(), tokens.generate_code());
    assert_eq!(tokens.to_string(), "<?php foo( $a );");
}

#[test]
fn equality_ignores_edit_history() {
    let mut edited = tokenize("($a)");
    edited.insert_at(1, Token::whitespace(" "));
    assert_eq!(edited, tokenize("( $a)"));
}

#[test]
fn collect_and_unwrap() {
    let tokens: Tokens = tokenize("f($a)").into_vec().into_iter().collect();
    assert_eq!(tokens.count_of_kind(TokenKind::CloseParen), 1);
    assert_eq!(tokens.get(1).map(Token::kind), Some(TokenKind::OpenParen));
    assert!(tokens.get(4).is_none());
    assert_eq!(tokens.as_slice().len(), 4);
    assert!(!tokens.is_empty());
    assert!(Tokens::new().is_empty());
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_match_contents_after_inserts(
            positions in proptest::collection::vec(0usize..16, 0..12),
        ) {
            let mut tokens = tokenize("f($a, g($b), [1])");
            for position in positions {
                let index = position.min(tokens.len());
                tokens.insert_at(index, Token::from_kind(TokenKind::OpenParen).unwrap());
            }
            for kind in TokenKind::ALL {
                let expected = tokens.iter().filter(|t| t.is_kind(kind)).count();
                prop_assert_eq!(tokens.count_of_kind(kind), expected);
            }
        }
    }
}
