//! Shunting-yard conversion from tokens to a flat RPN node stream.
//!
//! Alongside the operator stack, a context stack records pending
//! function-call and list-literal scopes together with their argument or
//! element counts. Counts start at zero, commas add one, and a non-empty
//! closing delimiter adds one for the final operand, so `f()` and `[]`
//! come out with count 0.

use crate::error::{LexError, ParseError};
use crate::lexer::{Token, TokenKind};
use crate::syntax::{BinaryOp, RpnNode, UnaryOp, UNARY_PRECEDENCE};
use crate::TermynusResult;

enum StackEntry {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Function(String),
    LeftParen,
    LeftBracket,
}

enum Context {
    Call { count: usize, mark: usize },
    List { count: usize, mark: usize },
}

/// Convert a token sequence to RPN.
pub fn shunting_yard(tokens: &[Token<'_>]) -> TermynusResult<Vec<RpnNode>> {
    let mut output: Vec<RpnNode> = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut contexts: Vec<Context> = Vec::new();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token.kind {
            TokenKind::Number => output.push(number_node(token.text)?),
            TokenKind::String => output.push(RpnNode::Str(unescape(strip_quotes(token.text)))),
            TokenKind::DateString => {
                output.push(RpnNode::Date(unescape(strip_date_quotes(token.text))))
            }
            TokenKind::Identifier => {
                // An identifier directly followed by `(` is a pending
                // function name; it waits on the operator stack until its
                // closing paren fixes the arity.
                if matches!(iter.peek(), Some(next) if next.kind == TokenKind::LeftParen) {
                    stack.push(StackEntry::Function(token.text.to_string()));
                } else {
                    output.push(RpnNode::Identifier(token.text.to_string()));
                }
            }
            TokenKind::Operator => {
                let op = BinaryOp::from_lexeme(token.text).ok_or_else(|| {
                    ParseError::MalformedExpression(format!("unknown operator '{}'", token.text))
                })?;
                while let Some(top) = stack.last() {
                    let pops = match top {
                        StackEntry::Binary(other) => other.precedence() >= op.precedence(),
                        StackEntry::Unary(_) => UNARY_PRECEDENCE >= op.precedence(),
                        _ => false,
                    };
                    if !pops {
                        break;
                    }
                    emit(&mut output, stack.pop());
                }
                stack.push(StackEntry::Binary(op));
            }
            TokenKind::UnaryOperator => {
                let op = UnaryOp::from_lexeme(token.text).ok_or_else(|| {
                    ParseError::MalformedExpression(format!(
                        "unknown unary operator '{}'",
                        token.text
                    ))
                })?;
                // Prefix operators outrank every binary operator and nest
                // right-to-left, so nothing is popped here.
                stack.push(StackEntry::Unary(op));
            }
            TokenKind::LeftParen => {
                if matches!(stack.last(), Some(StackEntry::Function(_))) {
                    contexts.push(Context::Call {
                        count: 0,
                        mark: output.len(),
                    });
                }
                stack.push(StackEntry::LeftParen);
            }
            TokenKind::LeftBracket => {
                contexts.push(Context::List {
                    count: 0,
                    mark: output.len(),
                });
                stack.push(StackEntry::LeftBracket);
            }
            TokenKind::Comma => {
                pop_operators(&mut stack, &mut output);
                if !matches!(
                    stack.last(),
                    Some(StackEntry::LeftParen) | Some(StackEntry::LeftBracket)
                ) {
                    return Err(ParseError::MalformedExpression(
                        "misplaced argument separator".to_string(),
                    )
                    .into());
                }
                match contexts.last_mut() {
                    Some(Context::Call { count, .. }) | Some(Context::List { count, .. }) => {
                        *count += 1
                    }
                    None => {
                        return Err(ParseError::MalformedExpression(
                            "argument separator outside a call or list".to_string(),
                        )
                        .into())
                    }
                }
            }
            TokenKind::RightParen => {
                pop_operators(&mut stack, &mut output);
                match stack.pop() {
                    Some(StackEntry::LeftParen) => {}
                    _ => return Err(ParseError::UnbalancedDelimiters.into()),
                }
                if matches!(stack.last(), Some(StackEntry::Function(_))) {
                    let name = match stack.pop() {
                        Some(StackEntry::Function(name)) => name,
                        _ => unreachable!(),
                    };
                    let (mut count, mark) = match contexts.pop() {
                        Some(Context::Call { count, mark }) => (count, mark),
                        _ => {
                            return Err(ParseError::MalformedExpression(
                                "call closed without a matching context".to_string(),
                            )
                            .into())
                        }
                    };
                    if output.len() > mark {
                        count += 1;
                    }
                    output.push(RpnNode::Function {
                        name,
                        arg_count: count,
                    });
                }
            }
            TokenKind::RightBracket => {
                pop_operators(&mut stack, &mut output);
                match stack.pop() {
                    Some(StackEntry::LeftBracket) => {}
                    _ => return Err(ParseError::UnbalancedDelimiters.into()),
                }
                let (mut count, mark) = match contexts.pop() {
                    Some(Context::List { count, mark }) => (count, mark),
                    _ => {
                        return Err(ParseError::MalformedExpression(
                            "list closed without a matching context".to_string(),
                        )
                        .into())
                    }
                };
                if output.len() > mark {
                    count += 1;
                }
                output.push(RpnNode::List {
                    element_count: count,
                });
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Binary(op) => output.push(RpnNode::Binary(op)),
            StackEntry::Unary(op) => output.push(RpnNode::Unary(op)),
            StackEntry::Function(_) | StackEntry::LeftParen | StackEntry::LeftBracket => {
                return Err(ParseError::UnbalancedDelimiters.into())
            }
        }
    }

    Ok(output)
}

/// Pop binary and unary entries to the output, stopping at any opening
/// delimiter or pending function name.
fn pop_operators(stack: &mut Vec<StackEntry>, output: &mut Vec<RpnNode>) {
    while matches!(
        stack.last(),
        Some(StackEntry::Binary(_)) | Some(StackEntry::Unary(_))
    ) {
        emit(output, stack.pop());
    }
}

fn emit(output: &mut Vec<RpnNode>, entry: Option<StackEntry>) {
    match entry {
        Some(StackEntry::Binary(op)) => output.push(RpnNode::Binary(op)),
        Some(StackEntry::Unary(op)) => output.push(RpnNode::Unary(op)),
        _ => {}
    }
}

/// Classify a numeric lexeme as integer or float and parse it. A `.` or
/// an exponent marker makes it a float.
fn number_node(lexeme: &str) -> TermynusResult<RpnNode> {
    if lexeme.contains(['.', 'e', 'E']) {
        lexeme
            .parse::<f64>()
            .map(RpnNode::Float)
            .map_err(|_| {
                LexError::BadNumber {
                    lexeme: lexeme.to_string(),
                }
                .into()
            })
    } else {
        lexeme
            .parse::<i64>()
            .map(RpnNode::Integer)
            .map_err(|_| {
                LexError::BadNumber {
                    lexeme: lexeme.to_string(),
                }
                .into()
            })
    }
}

fn strip_quotes(lexeme: &str) -> &str {
    &lexeme[1..lexeme.len() - 1]
}

fn strip_date_quotes(lexeme: &str) -> &str {
    &lexeme[2..lexeme.len() - 1]
}

/// Resolve backslash escapes. Common sequences map to their control
/// characters; anything else keeps the escaped character verbatim.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
