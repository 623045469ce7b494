//! Numeric built-ins: conversions, extrema, rounding, and the
//! float-valued math functions.

use super::{expect_integer, expect_number, require_at_least, require_count};
use crate::error::EvalError;
use crate::value::Value;
use crate::TermynusResult;

/// `int(x)` truncates floats toward zero.
pub(super) fn to_int(args: &[Value]) -> TermynusResult<Value> {
    require_count("int", args, 1)?;
    match &args[0] {
        Value::Integer(v) => Ok(Value::Integer(*v)),
        Value::Float(v) => Ok(Value::Integer(v.trunc() as i64)),
        Value::Boolean(v) => Ok(Value::Integer(i64::from(*v))),
        other => Err(type_error("int", other)),
    }
}

pub(super) fn to_float(args: &[Value]) -> TermynusResult<Value> {
    require_count("float", args, 1)?;
    match &args[0] {
        Value::Integer(v) => Ok(Value::Float(*v as f64)),
        Value::Float(v) => Ok(Value::Float(*v)),
        Value::Boolean(v) => Ok(Value::Float(if *v { 1.0 } else { 0.0 })),
        other => Err(type_error("float", other)),
    }
}

/// `bool(x)` is `x != 0`.
pub(super) fn to_bool(args: &[Value]) -> TermynusResult<Value> {
    require_count("bool", args, 1)?;
    match &args[0] {
        Value::Integer(v) => Ok(Value::Boolean(*v != 0)),
        Value::Float(v) => Ok(Value::Boolean(*v != 0.0)),
        Value::Boolean(v) => Ok(Value::Boolean(*v)),
        other => Err(type_error("bool", other)),
    }
}

/// Returns the original argument whose float projection is minimal, so
/// an integer winner stays an integer.
pub(super) fn min(args: &[Value]) -> TermynusResult<Value> {
    extremum("min", args, |candidate, best| candidate < best)
}

pub(super) fn max(args: &[Value]) -> TermynusResult<Value> {
    extremum("max", args, |candidate, best| candidate > best)
}

fn extremum(
    name: &str,
    args: &[Value],
    wins: fn(f64, f64) -> bool,
) -> TermynusResult<Value> {
    require_at_least(name, args, 1)?;
    let mut best = &args[0];
    let mut best_key = numeric_only(name, best)?;
    for candidate in &args[1..] {
        let key = numeric_only(name, candidate)?;
        if wins(key, best_key) {
            best = candidate;
            best_key = key;
        }
    }
    Ok(best.clone())
}

pub(super) fn abs(args: &[Value]) -> TermynusResult<Value> {
    require_count("abs", args, 1)?;
    match &args[0] {
        // checked_abs: |i64::MIN| does not fit in an i64.
        Value::Integer(v) => match v.checked_abs() {
            Some(value) => Ok(Value::Integer(value)),
            None => Err(EvalError::InvalidOperation {
                message: format!("integer overflow in abs({})", v),
            }
            .into()),
        },
        Value::Float(v) => Ok(Value::Float(v.abs())),
        other => Err(type_error("abs", other)),
    }
}

/// Integers pass through unchanged; floats round but stay floats.
pub(super) fn floor(args: &[Value]) -> TermynusResult<Value> {
    require_count("floor", args, 1)?;
    match &args[0] {
        Value::Integer(v) => Ok(Value::Integer(*v)),
        Value::Float(v) => Ok(Value::Float(v.floor())),
        other => Err(type_error("floor", other)),
    }
}

pub(super) fn ceil(args: &[Value]) -> TermynusResult<Value> {
    require_count("ceil", args, 1)?;
    match &args[0] {
        Value::Integer(v) => Ok(Value::Integer(*v)),
        Value::Float(v) => Ok(Value::Float(v.ceil())),
        other => Err(type_error("ceil", other)),
    }
}

pub(super) fn sqrt(args: &[Value]) -> TermynusResult<Value> {
    float_fn("sqrt", args, f64::sqrt)
}

pub(super) fn log(args: &[Value]) -> TermynusResult<Value> {
    float_fn("log", args, f64::ln)
}

pub(super) fn log2(args: &[Value]) -> TermynusResult<Value> {
    float_fn("log2", args, f64::log2)
}

pub(super) fn log10(args: &[Value]) -> TermynusResult<Value> {
    float_fn("log10", args, f64::log10)
}

pub(super) fn exp(args: &[Value]) -> TermynusResult<Value> {
    float_fn("exp", args, f64::exp)
}

pub(super) fn sin(args: &[Value]) -> TermynusResult<Value> {
    float_fn("sin", args, f64::sin)
}

pub(super) fn cos(args: &[Value]) -> TermynusResult<Value> {
    float_fn("cos", args, f64::cos)
}

pub(super) fn tan(args: &[Value]) -> TermynusResult<Value> {
    float_fn("tan", args, f64::tan)
}

pub(super) fn asin(args: &[Value]) -> TermynusResult<Value> {
    float_fn("asin", args, f64::asin)
}

pub(super) fn acos(args: &[Value]) -> TermynusResult<Value> {
    float_fn("acos", args, f64::acos)
}

pub(super) fn atan(args: &[Value]) -> TermynusResult<Value> {
    float_fn("atan", args, f64::atan)
}

fn float_fn(name: &str, args: &[Value], apply: fn(f64) -> f64) -> TermynusResult<Value> {
    require_count(name, args, 1)?;
    let value = expect_number(name, &args[0])?;
    Ok(Value::Float(apply(value)))
}

pub(super) fn gcd(args: &[Value]) -> TermynusResult<Value> {
    require_at_least("gcd", args, 2)?;
    let mut acc = expect_integer("gcd", &args[0])?.unsigned_abs();
    for arg in &args[1..] {
        let next = expect_integer("gcd", arg)?.unsigned_abs();
        acc = euclid(acc, next);
    }
    Ok(Value::Integer(acc as i64))
}

fn euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub(super) fn mean(args: &[Value]) -> TermynusResult<Value> {
    require_at_least("mean", args, 1)?;
    let mut sum = 0.0;
    for arg in args {
        sum += numeric_only("mean", arg)?;
    }
    Ok(Value::Float(sum / args.len() as f64))
}

pub(super) fn median(args: &[Value]) -> TermynusResult<Value> {
    require_at_least("median", args, 1)?;
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(numeric_only("median", arg)?);
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    };
    Ok(Value::Float(median))
}

/// Strictly numeric projection (no booleans), for the aggregate
/// functions whose winners must stay numbers.
fn numeric_only(name: &str, value: &Value) -> TermynusResult<f64> {
    match value {
        Value::Integer(v) => Ok(*v as f64),
        Value::Float(v) => Ok(*v),
        other => Err(type_error(name, other)),
    }
}

fn type_error(name: &str, value: &Value) -> crate::TermynusError {
    EvalError::TypeError {
        message: format!("{} expects a number, got {}", name, value.describe()),
    }
    .into()
}
