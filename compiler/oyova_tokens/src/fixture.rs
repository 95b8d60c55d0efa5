//! PHP-subset tokenizer for tests.
//!
//! Real hosts supply their own tokenizer. This one covers enough PHP to write
//! readable test inputs: open tags, variables, identifiers and keywords,
//! string and numeric literals, comments, delimiters and operators. A `use`
//! keyword directly after a `)` (ignoring trivia) is tagged
//! [`TokenKind::UseLambda`].

use crate::{Token, TokenKind, Tokens};

const KEYWORDS: &[&str] = &[
    "abstract", "array", "as", "break", "case", "catch", "class", "const", "continue", "default",
    "do", "echo", "else", "elseif", "extends", "final", "fn", "for", "foreach", "function", "if",
    "implements", "interface", "match", "namespace", "new", "private", "protected", "public",
    "readonly", "return", "static", "switch", "throw", "trait", "try", "use", "while",
];

const OPERATOR_CHARS: &str = "=+-*/%<>!&|.^~?:@";

/// Split `source` into a token stream. Concatenating the token contents
/// reproduces `source` exactly.
pub fn tokenize(source: &str) -> Tokens {
    let mut scanner = FixtureScanner {
        source,
        pos: 0,
        tokens: Vec::new(),
    };
    while scanner.pos < source.len() {
        scanner.next_token();
    }
    Tokens::from_vec(scanner.tokens)
}

struct FixtureScanner<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> FixtureScanner<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn next_token(&mut self) {
        let rest = self.rest();
        let Some(first) = rest.chars().next() else {
            return;
        };

        if rest.starts_with("<?php") {
            self.emit(TokenKind::OpenTag, "<?php".len());
        } else if rest.starts_with("//") || first == '#' {
            let len = rest.find('\n').unwrap_or(rest.len());
            self.emit(TokenKind::Comment, len);
        } else if rest.starts_with("/*") {
            let len = rest[2..].find("*/").map_or(rest.len(), |end| end + 4);
            let kind = if rest.starts_with("/**") && len > "/**/".len() {
                TokenKind::DocComment
            } else {
                TokenKind::Comment
            };
            self.emit(kind, len);
        } else if matches!(first, ' ' | '\t' | '\r' | '\n') {
            self.emit_while(TokenKind::Whitespace, 0, |c| matches!(c, ' ' | '\t' | '\r' | '\n'));
        } else if first == '$' && rest[1..].starts_with(is_ident_start) {
            self.emit_while(TokenKind::Variable, 1, is_ident_continue);
        } else if is_ident_start(first) {
            self.identifier();
        } else if first.is_ascii_digit() {
            self.emit_while(TokenKind::Literal, 0, |c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
        } else if first == '\'' || first == '"' {
            self.string(first);
        } else if let Some(kind) = delimiter_kind(first) {
            self.emit(kind, 1);
        } else if first == ',' || first == ';' {
            self.emit(TokenKind::Punct, 1);
        } else if OPERATOR_CHARS.contains(first) {
            self.operator();
        } else {
            self.emit(TokenKind::Other, first.len_utf8());
        }
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let text = &self.source[self.pos..self.pos + len];
        self.tokens.push(Token::new(kind, text));
        self.pos += len;
    }

    /// Emit `skip` leading bytes plus every following char matching `pred`.
    fn emit_while(&mut self, kind: TokenKind, skip: usize, pred: impl Fn(char) -> bool) {
        let rest = &self.rest()[skip..];
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.emit(kind, skip + len);
    }

    fn identifier(&mut self) {
        let rest = self.rest();
        let len = rest.find(|c: char| !is_ident_continue(c)).unwrap_or(rest.len());
        let word = &rest[..len];
        let kind = if word.eq_ignore_ascii_case("use") && self.follows_close_paren() {
            TokenKind::UseLambda
        } else if KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.emit(kind, len);
    }

    fn follows_close_paren(&self) -> bool {
        self.tokens
            .iter()
            .rev()
            .find(|token| token.is_meaningful())
            .is_some_and(|token| token.is_kind(TokenKind::CloseParen))
    }

    fn string(&mut self, quote: char) {
        let rest = self.rest();
        let mut escaped = false;
        let mut len = rest.len();
        for (offset, c) in rest.char_indices().skip(1) {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                len = offset + c.len_utf8();
                break;
            }
        }
        self.emit(TokenKind::Literal, len);
    }

    fn operator(&mut self) {
        let rest = self.rest();
        let mut len = 0;
        for (offset, c) in rest.char_indices() {
            let tail = &rest[offset..];
            if !OPERATOR_CHARS.contains(c) || (offset > 0 && (tail.starts_with("//") || tail.starts_with("/*"))) {
                break;
            }
            len = offset + c.len_utf8();
        }
        self.emit(TokenKind::Punct, len);
    }
}

fn delimiter_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '{' => Some(TokenKind::OpenBrace),
        '}' => Some(TokenKind::CloseBrace),
        '[' => Some(TokenKind::OpenBracket),
        ']' => Some(TokenKind::CloseBracket),
        _ => None,
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '\\'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\\'
}
