//! Hand-written scanner producing a flat token sequence.
//!
//! The scanner walks the source bytes once with at most two bytes of
//! look-ahead. Tokens borrow their lexemes from the source, including
//! surrounding quotes and the `d` prefix of date literals.

use crate::error::LexError;
use serde::Serialize;

/// Token classification. Serialized names match the wire schema used by
/// the JSON bridge (`date_string`, `left_paren`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    DateString,
    Operator,
    UnaryOperator,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Comma,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::DateString => "date_string",
            TokenKind::Operator => "operator",
            TokenKind::UnaryOperator => "unary_operator",
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftBracket => "left_bracket",
            TokenKind::RightBracket => "right_bracket",
            TokenKind::Comma => "comma",
        }
    }
}

/// A token with its verbatim source lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

const TWO_CHAR_OPERATORS: [&str; 8] = ["**", "//", "==", "!=", "<=", ">=", "<<", ">>"];
const KEYWORD_OPERATORS: [&str; 4] = ["and", "or", "mod", "xor"];

/// Scan `source` into tokens. Unrecognized bytes are skipped silently.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let bytes = source.as_bytes();
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Date literal: `d` immediately followed by a quote.
        if c == b'd' && matches!(bytes.get(i + 1), Some(&b'\'') | Some(&b'"')) {
            let end = scan_quoted(bytes, i + 1)?;
            tokens.push(Token {
                kind: TokenKind::DateString,
                text: &source[i..end],
            });
            i = end;
            continue;
        }

        if c == b'\'' || c == b'"' {
            let end = scan_quoted(bytes, i)?;
            tokens.push(Token {
                kind: TokenKind::String,
                text: &source[i..end],
            });
            i = end;
            continue;
        }

        if c == b'-' {
            let numeric_next =
                matches!(bytes.get(i + 1), Some(b) if b.is_ascii_digit() || *b == b'.');
            if prefix_position(tokens.last()) {
                if numeric_next {
                    let end = scan_number(bytes, i + 1);
                    tokens.push(Token {
                        kind: TokenKind::Number,
                        text: &source[i..end],
                    });
                    i = end;
                } else {
                    tokens.push(Token {
                        kind: TokenKind::UnaryOperator,
                        text: &source[i..i + 1],
                    });
                    i += 1;
                }
            } else {
                tokens.push(Token {
                    kind: TokenKind::Operator,
                    text: &source[i..i + 1],
                });
                i += 1;
            }
            continue;
        }

        // Longest-prefix match for multi-character operators.
        if i + 2 <= bytes.len() {
            let pair = &source[i..i + 2];
            if TWO_CHAR_OPERATORS.contains(&pair) {
                tokens.push(Token {
                    kind: TokenKind::Operator,
                    text: pair,
                });
                i += 2;
                continue;
            }
        }

        let structural = match c {
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            b'[' => Some(TokenKind::LeftBracket),
            b']' => Some(TokenKind::RightBracket),
            b',' => Some(TokenKind::Comma),
            b'!' => Some(TokenKind::UnaryOperator),
            b'+' | b'*' | b'/' | b'%' | b'<' | b'>' | b'&' | b'|' => Some(TokenKind::Operator),
            _ => None,
        };
        if let Some(kind) = structural {
            tokens.push(Token {
                kind,
                text: &source[i..i + 1],
            });
            i += 1;
            continue;
        }

        if c.is_ascii_digit()
            || (c == b'.' && matches!(bytes.get(i + 1), Some(b) if b.is_ascii_digit()))
        {
            let end = scan_number(bytes, i);
            tokens.push(Token {
                kind: TokenKind::Number,
                text: &source[i..end],
            });
            i = end;
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' || c == b'$' {
            let mut end = i + 1;
            while end < bytes.len()
                && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_' || bytes[end] == b'.')
            {
                end += 1;
            }
            let word = &source[i..end];
            let kind = if word == "not" {
                TokenKind::UnaryOperator
            } else if KEYWORD_OPERATORS.contains(&word) {
                TokenKind::Operator
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token { kind, text: word });
            i = end;
            continue;
        }

        // Anything else is dropped.
        i += 1;
    }

    Ok(tokens)
}

/// A `-` is the start of a number or a prefix operator only when nothing
/// precedes it that could act as a left operand.
fn prefix_position(previous: Option<&Token<'_>>) -> bool {
    match previous {
        None => true,
        Some(token) => matches!(
            token.kind,
            TokenKind::Operator
                | TokenKind::UnaryOperator
                | TokenKind::Comma
                | TokenKind::LeftParen
                | TokenKind::LeftBracket
        ),
    }
}

/// Scan a quoted literal starting at the opening quote. Returns the byte
/// index one past the closing quote. Backslash escapes any byte.
fn scan_quoted(bytes: &[u8], start: usize) -> Result<usize, LexError> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Ok(i + 1),
            _ => i += 1,
        }
    }
    Err(LexError::UnterminatedString { position: start })
}

/// Scan the digits of a number: at most one `.`, then an optional signed
/// `e`/`E` exponent. The exponent is consumed only when a digit follows,
/// so `2e` lexes as the number `2` and the identifier `e`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    let mut seen_dot = false;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_digit() {
            i += 1;
        } else if b == b'.' && !seen_dot {
            seen_dot = true;
            i += 1;
        } else {
            break;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j + 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}
