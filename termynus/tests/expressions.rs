//! End-to-end scenarios exercising the whole pipeline through the
//! public API.

use termynus::{eval_str, EvalError, TermynusError, Value};

fn eval(source: &str) -> Value {
    eval_str(source).unwrap_or_else(|err| panic!("'{}' failed: {}", source, err))
}

fn eval_error(source: &str) -> EvalError {
    match eval_str(source) {
        Err(TermynusError::Eval(err)) => err,
        other => panic!("expected '{}' to fail evaluation, got {:?}", source, other),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("5 + 3 * 2"), Value::Integer(11));
    assert_eq!(eval("(5 + 3) * 2"), Value::Integer(16));
    assert_eq!(eval("2 * (3 + 4) - 5"), Value::Integer(9));
}

#[test]
fn numeric_promotion() {
    assert_eq!(eval("1 + 2.5"), Value::Float(3.5));
}

#[test]
fn division_and_power() {
    assert_eq!(eval("10 / 3"), Value::Integer(3));
    assert_eq!(eval("7.0 / 2"), Value::Float(3.5));
    assert_eq!(eval("7 // 2"), Value::Integer(3));
    assert_eq!(eval("7 % 3"), Value::Integer(1));
    assert_eq!(eval("2 ** 3"), Value::Integer(8));
}

#[test]
fn logic_and_negation() {
    assert_eq!(eval("(5 > 3) and (2 < 4)"), Value::Boolean(true));
    assert_eq!(eval("not (5 < 3)"), Value::Boolean(true));
}

#[test]
fn ordered_strings_and_dates() {
    assert_eq!(eval("'abc' < 'def'"), Value::Boolean(true));
    assert_eq!(eval("d'2023-01-01' < d'2023-12-31'"), Value::Boolean(true));
}

#[test]
fn lists_evaluate_elementwise() {
    assert_eq!(
        eval("[1, 2 + 3, 4 * 2]"),
        Value::List(vec![Value::Integer(1), Value::Integer(5), Value::Integer(8)])
    );
    assert_eq!(eval("list.get([1, 2, 3], 1)"), Value::Integer(2));
    assert_eq!(eval("list.length([1, 2, 3])"), Value::Integer(3));
}

#[test]
fn failure_modes() {
    assert_eq!(eval_error("1 / 0"), EvalError::DivisionByZero);
    assert!(matches!(
        eval_error("x + 1"),
        EvalError::UndefinedIdentifier { .. }
    ));
    assert!(matches!(
        eval_error("'a' + 1"),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn extrema_and_rounding() {
    assert_eq!(eval("min(5, 3)"), Value::Integer(3));
    assert_eq!(eval("max(5.14, 3)"), Value::Float(5.14));
    assert_eq!(eval("abs(-42)"), Value::Integer(42));
    assert_eq!(eval("floor(3.7)"), Value::Float(3.0));
    assert_eq!(eval("ceil(3.2)"), Value::Float(4.0));
}

#[test]
fn composite_expressions() {
    assert_eq!(
        eval("str.concat('total: ', min(3, 2) + 10)"),
        Value::Str("total: 12".to_string())
    );
    assert_eq!(
        eval("list.map(list.filter([1, 2, 3, 4], def('big', ['x'], 'x > 2')), abs)"),
        Value::List(vec![Value::Integer(3), Value::Integer(4)])
    );
    assert_eq!(eval("mean(1, 2, 3) * 2"), Value::Float(4.0));
}
