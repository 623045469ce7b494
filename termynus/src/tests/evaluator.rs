use crate::error::{EvalError, TermynusError};
use crate::value::Value;
use crate::{eval_str, evaluate, parse, Environment};

fn eval_error(source: &str) -> EvalError {
    match eval_str(source) {
        Err(TermynusError::Eval(err)) => err,
        other => panic!("expected evaluation error, got {:?}", other),
    }
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_eq!(eval_str("5 + 3 * 2").unwrap(), Value::Integer(11));
    assert_eq!(eval_str("(5 + 3) * 2").unwrap(), Value::Integer(16));
    assert_eq!(eval_str("2 * (3 + 4) - 5").unwrap(), Value::Integer(9));
}

#[test]
fn floats_are_contagious() {
    assert_eq!(eval_str("1 + 2.5").unwrap(), Value::Float(3.5));
    assert_eq!(eval_str("2.0 * 3").unwrap(), Value::Float(6.0));
    assert_eq!(eval_str("7.0 / 2").unwrap(), Value::Float(3.5));
}

#[test]
fn division_family() {
    assert_eq!(eval_str("10 / 3").unwrap(), Value::Integer(3));
    assert_eq!(eval_str("7 // 2").unwrap(), Value::Integer(3));
    assert_eq!(eval_str("7 % 3").unwrap(), Value::Integer(1));
    assert_eq!(eval_str("7 mod 3").unwrap(), Value::Integer(1));
    assert_eq!(eval_str("2 ** 3").unwrap(), Value::Integer(8));
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    assert_eq!(eval_str("-7 // 2").unwrap(), Value::Integer(-4));
    assert_eq!(eval_str("7 // -2").unwrap(), Value::Integer(-4));
    assert_eq!(eval_str("-7.0 // 2").unwrap(), Value::Float(-4.0));
}

#[test]
fn modulo_takes_the_sign_of_the_divisor() {
    assert_eq!(eval_str("-7 % 3").unwrap(), Value::Integer(2));
    assert_eq!(eval_str("7 % -3").unwrap(), Value::Integer(-2));
    assert_eq!(eval_str("-7.5 % 2").unwrap(), Value::Float(0.5));
}

#[test]
fn power_promotes_on_negative_exponent() {
    assert_eq!(eval_str("2 ** -1").unwrap(), Value::Float(0.5));
    assert_eq!(eval_str("2.0 ** 3").unwrap(), Value::Float(8.0));
}

#[test]
fn power_is_left_associative() {
    assert_eq!(eval_str("2 ** 3 ** 2").unwrap(), Value::Integer(64));
}

#[test]
fn integer_power_overflow_is_reported() {
    assert!(matches!(
        eval_error("10 ** 40"),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn integer_overflow_is_reported_not_wrapped() {
    assert!(matches!(
        eval_error(&format!("{} + 1", i64::MAX)),
        EvalError::InvalidOperation { .. }
    ));
    assert!(matches!(
        eval_error(&format!("{} - 1", i64::MIN)),
        EvalError::InvalidOperation { .. }
    ));
    assert!(matches!(
        eval_error(&format!("{} * 2", i64::MAX)),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn division_of_min_by_minus_one_is_reported() {
    assert!(matches!(
        eval_error(&format!("{} / -1", i64::MIN)),
        EvalError::InvalidOperation { .. }
    ));
    assert!(matches!(
        eval_error(&format!("{} // -1", i64::MIN)),
        EvalError::InvalidOperation { .. }
    ));
    assert!(matches!(
        eval_error(&format!("{} % -1", i64::MIN)),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn negating_min_is_reported() {
    assert!(matches!(
        eval_error(&format!("-({})", i64::MIN)),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn boundary_values_still_evaluate() {
    assert_eq!(
        eval_str(&format!("{} + 0", i64::MAX)).unwrap(),
        Value::Integer(i64::MAX)
    );
    assert_eq!(
        eval_str(&format!("{} / -1", i64::MAX)).unwrap(),
        Value::Integer(-i64::MAX)
    );
    assert_eq!(
        eval_str(&format!("{}", i64::MIN)).unwrap(),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn unary_operators() {
    assert_eq!(eval_str("-(2 + 3)").unwrap(), Value::Integer(-5));
    assert_eq!(eval_str("not (5 < 3)").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("not 0").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("not 5").unwrap(), Value::Boolean(false));
    assert_eq!(eval_str("not 0.0").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("!true").unwrap(), Value::Boolean(false));
}

#[test]
fn comparisons() {
    assert_eq!(eval_str("(5 > 3) and (2 < 4)").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("1 == 1.0").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("1 != 2").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("true == 1").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("false < 1").unwrap(), Value::Boolean(true));
}

#[test]
fn strings_and_dates_compare_lexicographically() {
    assert_eq!(eval_str("'abc' < 'def'").unwrap(), Value::Boolean(true));
    assert_eq!(eval_str("'abc' == 'abc'").unwrap(), Value::Boolean(true));
    assert_eq!(
        eval_str("d'2023-01-01' < d'2023-12-31'").unwrap(),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_str("d'2023-01-01' == d'2023-01-01'").unwrap(),
        Value::Boolean(true)
    );
}

#[test]
fn cross_kind_comparison_is_invalid() {
    assert!(matches!(
        eval_error("'a' < 1"),
        EvalError::InvalidOperation { .. }
    ));
    assert!(matches!(
        eval_error("'a' == d'2023-01-01'"),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn logic_requires_booleans() {
    assert_eq!(eval_str("true and false").unwrap(), Value::Boolean(false));
    assert_eq!(eval_str("true or false").unwrap(), Value::Boolean(true));
    assert!(matches!(
        eval_error("1 and 2"),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn bitwise_operators() {
    assert_eq!(eval_str("5 & 3").unwrap(), Value::Integer(1));
    assert_eq!(eval_str("5 | 3").unwrap(), Value::Integer(7));
    assert_eq!(eval_str("5 xor 3").unwrap(), Value::Integer(6));
    assert_eq!(eval_str("1 << 4").unwrap(), Value::Integer(16));
    assert_eq!(eval_str("16 >> 2").unwrap(), Value::Integer(4));
}

#[test]
fn shift_amount_is_clamped_to_63() {
    assert_eq!(eval_str("1 << 100").unwrap(), Value::Integer(i64::MIN));
    assert_eq!(eval_str("-1 >> 100").unwrap(), Value::Integer(-1));
}

#[test]
fn negative_shift_is_invalid() {
    assert!(matches!(
        eval_error("1 << -1"),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn string_concatenation_through_plus() {
    assert_eq!(eval_str("'a' + 'b'").unwrap(), Value::Str("ab".to_string()));
}

#[test]
fn list_concatenation_through_plus() {
    assert_eq!(
        eval_str("[1] + [2, 3]").unwrap(),
        Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
    );
}

#[test]
fn mixed_kind_addition_is_invalid() {
    assert!(matches!(
        eval_error("'a' + 1"),
        EvalError::InvalidOperation { .. }
    ));
}

#[test]
fn list_literals_evaluate_their_elements() {
    assert_eq!(
        eval_str("[1, 2 + 3, 4 * 2]").unwrap(),
        Value::List(vec![Value::Integer(1), Value::Integer(5), Value::Integer(8)])
    );
    assert_eq!(eval_str("[]").unwrap(), Value::List(Vec::new()));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_error("1 / 0"), EvalError::DivisionByZero);
    assert_eq!(eval_error("1 // 0"), EvalError::DivisionByZero);
    assert_eq!(eval_error("1 % 0"), EvalError::DivisionByZero);
    assert_eq!(eval_error("1.0 / 0"), EvalError::DivisionByZero);
}

#[test]
fn undefined_identifier() {
    assert_eq!(
        eval_error("x + 1"),
        EvalError::UndefinedIdentifier {
            name: "x".to_string()
        }
    );
}

#[test]
fn environment_bindings_resolve() {
    let tree = parse("price * quantity").unwrap();
    let mut env = Environment::new();
    env.insert("price", Value::Integer(100));
    env.insert("quantity", Value::Integer(5));
    assert_eq!(evaluate(&tree, &mut env).unwrap(), Value::Integer(500));
}

#[test]
fn a_tree_can_be_reused_across_environments() {
    let tree = parse("n + 1").unwrap();
    for n in [0i64, 7, -3] {
        let mut env = Environment::new();
        env.insert("n", Value::Integer(n));
        assert_eq!(evaluate(&tree, &mut env).unwrap(), Value::Integer(n + 1));
    }
}

#[test]
fn child_scopes_shadow_and_fall_through() {
    let mut root = Environment::new();
    root.insert("a", Value::Integer(1));
    root.insert("b", Value::Integer(2));
    let mut child = root.child();
    child.insert("a", Value::Integer(10));
    let tree = parse("a + b").unwrap();
    assert_eq!(evaluate(&tree, &mut child).unwrap(), Value::Integer(12));
}

#[test]
fn bindings_shadow_constants() {
    let tree = parse("pi").unwrap();
    let mut env = Environment::new();
    env.insert("pi", Value::Integer(3));
    assert_eq!(evaluate(&tree, &mut env).unwrap(), Value::Integer(3));
}

#[test]
fn calling_a_non_function_is_a_type_error() {
    let tree = parse("x(1)").unwrap();
    let mut env = Environment::new();
    env.insert("x", Value::Integer(5));
    assert!(matches!(
        evaluate(&tree, &mut env),
        Err(TermynusError::Eval(EvalError::TypeError { .. }))
    ));
}

#[test]
fn unknown_function_name() {
    assert!(matches!(
        eval_error("nosuch(1)"),
        EvalError::UndefinedIdentifier { .. }
    ));
}
