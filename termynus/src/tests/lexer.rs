use crate::error::LexError;
use crate::lexer::{tokenize, TokenKind};

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source)
        .expect("tokenize")
        .iter()
        .map(|t| t.text.to_string())
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).expect("tokenize").iter().map(|t| t.kind).collect()
}

#[test]
fn identifiers_and_keywords() {
    assert_eq!(lexemes("tm1 and tm2"), vec!["tm1", "and", "tm2"]);
    assert_eq!(
        kinds("tm1 and tm2"),
        vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]
    );
}

#[test]
fn string_literals_keep_their_quotes() {
    assert_eq!(lexemes("'tm1' and tm2"), vec!["'tm1'", "and", "tm2"]);
    assert_eq!(kinds("'x'")[0], TokenKind::String);
    assert_eq!(lexemes(r#""double" 'single'"#), vec![r#""double""#, "'single'"]);
}

#[test]
fn date_literals_keep_the_prefix() {
    assert_eq!(lexemes("d'2023-01-01' and tm2"), vec!["d'2023-01-01'", "and", "tm2"]);
    assert_eq!(kinds("d'2023-01-01'")[0], TokenKind::DateString);
    assert_eq!(kinds(r#"d"2023-01-01""#)[0], TokenKind::DateString);
}

#[test]
fn identifier_starting_with_d_is_not_a_date() {
    assert_eq!(kinds("data")[0], TokenKind::Identifier);
    assert_eq!(lexemes("data"), vec!["data"]);
}

#[test]
fn list_and_call_punctuation() {
    assert_eq!(lexemes("[tm1,and,tm2]"), vec!["[", "tm1", ",", "and", ",", "tm2", "]"]);
    assert_eq!(
        lexemes("fun(tm1,'x',tm2)"),
        vec!["fun", "(", "tm1", ",", "'x'", ",", "tm2", ")"]
    );
}

#[test]
fn dotted_identifiers() {
    assert_eq!(
        lexemes("str.concat(tm1.x,'x',tm2.y)"),
        vec!["str.concat", "(", "tm1.x", ",", "'x'", ",", "tm2.y", ")"]
    );
}

#[test]
fn minus_is_binary_after_an_operand() {
    assert_eq!(lexemes("1 - 2"), vec!["1", "-", "2"]);
    assert_eq!(kinds("1 - 2")[1], TokenKind::Operator);
    assert_eq!(lexemes("x-2"), vec!["x", "-", "2"]);
    assert_eq!(lexemes("(1)-2"), vec!["(", "1", ")", "-", "2"]);
}

#[test]
fn minus_joins_a_number_in_prefix_position() {
    assert_eq!(lexemes("-2"), vec!["-2"]);
    assert_eq!(lexemes("3 * -2"), vec!["3", "*", "-2"]);
    assert_eq!(lexemes("(-2)"), vec!["(", "-2", ")"]);
    assert_eq!(lexemes("f(-2, -.5)"), vec!["f", "(", "-2", ",", "-.5", ")"]);
    assert_eq!(kinds("-2")[0], TokenKind::Number);
}

#[test]
fn minus_before_an_identifier_is_unary() {
    assert_eq!(kinds("-x"), vec![TokenKind::UnaryOperator, TokenKind::Identifier]);
    assert_eq!(kinds("3 * - x")[2], TokenKind::UnaryOperator);
}

#[test]
fn multi_character_operators() {
    assert_eq!(lexemes("a ** b // c << d >> e"), vec!["a", "**", "b", "//", "c", "<<", "d", ">>", "e"]);
    assert_eq!(lexemes("a<=b>=c==d!=e"), vec!["a", "<=", "b", ">=", "c", "==", "d", "!=", "e"]);
}

#[test]
fn bang_alone_is_unary() {
    assert_eq!(kinds("!x")[0], TokenKind::UnaryOperator);
    assert_eq!(kinds("a != b")[1], TokenKind::Operator);
    assert_eq!(kinds("not x")[0], TokenKind::UnaryOperator);
}

#[test]
fn scientific_numbers() {
    assert_eq!(lexemes("1.5e-3"), vec!["1.5e-3"]);
    assert_eq!(lexemes("2E+10"), vec!["2E+10"]);
    assert_eq!(lexemes(".5"), vec![".5"]);
    // `e` with no digits after it is not an exponent
    assert_eq!(lexemes("2e"), vec!["2", "e"]);
}

#[test]
fn number_with_two_dots_splits() {
    assert_eq!(lexemes("1.2.3"), vec!["1.2", ".3"]);
}

#[test]
fn unknown_bytes_are_skipped() {
    assert_eq!(lexemes("5 @ 3"), vec!["5", "3"]);
    assert_eq!(lexemes("a ; b"), vec!["a", "b"]);
}

#[test]
fn escaped_quotes_stay_inside_the_literal() {
    assert_eq!(lexemes(r"'it\'s'"), vec![r"'it\'s'"]);
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(
        tokenize("'abc").unwrap_err(),
        LexError::UnterminatedString { position: 0 }
    );
    assert_eq!(
        tokenize("x + d'2023").unwrap_err(),
        LexError::UnterminatedString { position: 5 }
    );
}
