//! Operator semantics: numeric promotion, the division family,
//! comparisons, logic, and integer bitwise operations.
//!
//! Integer-only expressions stay integer; any float operand promotes the
//! operation to floats. `/` truncates on integers, `//` is floor
//! division, and `%` pairs with `//` (result takes the sign of the
//! divisor). Division and modulo by zero report an error in both the
//! integer and float domains.

use crate::error::EvalError;
use crate::syntax::{BinaryOp, UnaryOp};
use crate::value::Value;
use crate::TermynusResult;

/// Shift amounts are clamped here before shifting an i64.
const MAX_SHIFT: i64 = 63;

pub fn binary_operation(left: Value, op: BinaryOp, right: Value) -> TermynusResult<Value> {
    match op {
        BinaryOp::Add
        | BinaryOp::Subtract
        | BinaryOp::Multiply
        | BinaryOp::Divide
        | BinaryOp::FloorDivide
        | BinaryOp::Modulo
        | BinaryOp::Power => arithmetic(left, op, right),
        BinaryOp::Equal
        | BinaryOp::NotEqual
        | BinaryOp::Less
        | BinaryOp::LessEqual
        | BinaryOp::Greater
        | BinaryOp::GreaterEqual => comparison(left, op, right),
        BinaryOp::And | BinaryOp::Or => logical(left, op, right),
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => bitwise(left, op, right),
        BinaryOp::ShiftLeft | BinaryOp::ShiftRight => shift(left, op, right),
    }
}

pub fn unary_operation(op: UnaryOp, value: Value) -> TermynusResult<Value> {
    match (op, value) {
        // checked_neg: -i64::MIN does not fit in an i64.
        (UnaryOp::Negate, Value::Integer(v)) => match v.checked_neg() {
            Some(negated) => Ok(Value::Integer(negated)),
            None => Err(EvalError::InvalidOperation {
                message: format!("integer overflow negating {}", v),
            }
            .into()),
        },
        (UnaryOp::Negate, Value::Float(v)) => Ok(Value::Float(-v)),
        (UnaryOp::Not, Value::Integer(v)) => Ok(Value::Boolean(v == 0)),
        (UnaryOp::Not, Value::Float(v)) => Ok(Value::Boolean(v == 0.0)),
        (UnaryOp::Not, Value::Boolean(v)) => Ok(Value::Boolean(!v)),
        (op, value) => Err(EvalError::InvalidOperation {
            message: format!("'{}' is not defined for {}", op.symbol(), value.type_name()),
        }
        .into()),
    }
}

fn arithmetic(left: Value, op: BinaryOp, right: Value) -> TermynusResult<Value> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => integer_arithmetic(*l, op, *r),
        // String and list concatenation through `+` survive from the
        // reference implementation.
        (Value::Str(l), Value::Str(r)) if op == BinaryOp::Add => {
            Ok(Value::Str(format!("{}{}", l, r)))
        }
        (Value::List(l), Value::List(r)) if op == BinaryOp::Add => {
            let mut items = l.clone();
            items.extend(r.iter().cloned());
            Ok(Value::List(items))
        }
        _ => match (float_operand(&left), float_operand(&right)) {
            (Some(l), Some(r)) => float_arithmetic(l, op, r),
            _ => Err(invalid(op.symbol(), &left, &right)),
        },
    }
}

/// Integer arithmetic never wraps: a result that does not fit in an i64
/// (including `i64::MIN / -1`) is reported as an invalid operation.
fn integer_arithmetic(l: i64, op: BinaryOp, r: i64) -> TermynusResult<Value> {
    match op {
        BinaryOp::Add => checked(l.checked_add(r), l, op, r),
        BinaryOp::Subtract => checked(l.checked_sub(r), l, op, r),
        BinaryOp::Multiply => checked(l.checked_mul(r), l, op, r),
        BinaryOp::Divide => {
            if r == 0 {
                return Err(EvalError::DivisionByZero.into());
            }
            checked(l.checked_div(r), l, op, r)
        }
        BinaryOp::FloorDivide => {
            if r == 0 {
                return Err(EvalError::DivisionByZero.into());
            }
            let mut q = l.checked_div(r).ok_or_else(|| overflow(l, op, r))?;
            // Safe: l % r can only overflow for MIN / -1, rejected above.
            if l % r != 0 && (l < 0) != (r < 0) {
                q -= 1;
            }
            Ok(Value::Integer(q))
        }
        BinaryOp::Modulo => {
            if r == 0 {
                return Err(EvalError::DivisionByZero.into());
            }
            let m = l.checked_rem(r).ok_or_else(|| overflow(l, op, r))?;
            if m != 0 && (m < 0) != (r < 0) {
                Ok(Value::Integer(m + r))
            } else {
                Ok(Value::Integer(m))
            }
        }
        BinaryOp::Power => {
            if r < 0 {
                return Ok(Value::Float((l as f64).powf(r as f64)));
            }
            let result = u32::try_from(r).ok().and_then(|e| l.checked_pow(e));
            checked(result, l, op, r)
        }
        _ => unreachable!("non-arithmetic operator in arithmetic dispatch"),
    }
}

fn checked(result: Option<i64>, l: i64, op: BinaryOp, r: i64) -> TermynusResult<Value> {
    match result {
        Some(value) => Ok(Value::Integer(value)),
        None => Err(overflow(l, op, r)),
    }
}

fn overflow(l: i64, op: BinaryOp, r: i64) -> crate::TermynusError {
    EvalError::InvalidOperation {
        message: format!("integer overflow in {} {} {}", l, op.symbol(), r),
    }
    .into()
}

fn float_arithmetic(l: f64, op: BinaryOp, r: f64) -> TermynusResult<Value> {
    match op {
        BinaryOp::Add => Ok(Value::Float(l + r)),
        BinaryOp::Subtract => Ok(Value::Float(l - r)),
        BinaryOp::Multiply => Ok(Value::Float(l * r)),
        BinaryOp::Divide => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero.into());
            }
            Ok(Value::Float(l / r))
        }
        BinaryOp::FloorDivide => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero.into());
            }
            Ok(Value::Float((l / r).floor()))
        }
        BinaryOp::Modulo => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero.into());
            }
            let m = l % r;
            if m != 0.0 && (m < 0.0) != (r < 0.0) {
                Ok(Value::Float(m + r))
            } else {
                Ok(Value::Float(m))
            }
        }
        BinaryOp::Power => Ok(Value::Float(l.powf(r))),
        _ => unreachable!("non-arithmetic operator in arithmetic dispatch"),
    }
}

fn comparison(left: Value, op: BinaryOp, right: Value) -> TermynusResult<Value> {
    let result = match (&left, &right) {
        (Value::Str(l), Value::Str(r)) => ordering_matches(op, l.as_str().cmp(r.as_str())),
        (Value::Date(l), Value::Date(r)) => ordering_matches(op, l.as_str().cmp(r.as_str())),
        // Exact integer comparison, no float round-trip.
        (Value::Integer(l), Value::Integer(r)) => ordering_matches(op, l.cmp(r)),
        _ => match (comparable_operand(&left), comparable_operand(&right)) {
            (Some(l), Some(r)) => float_matches(op, l, r),
            _ => return Err(invalid(op.symbol(), &left, &right)),
        },
    };
    Ok(Value::Boolean(result))
}

fn ordering_matches(op: BinaryOp, ordering: std::cmp::Ordering) -> bool {
    match op {
        BinaryOp::Equal => ordering.is_eq(),
        BinaryOp::NotEqual => !ordering.is_eq(),
        BinaryOp::Less => ordering.is_lt(),
        BinaryOp::LessEqual => ordering.is_le(),
        BinaryOp::Greater => ordering.is_gt(),
        BinaryOp::GreaterEqual => ordering.is_ge(),
        _ => unreachable!("non-comparison operator in comparison dispatch"),
    }
}

/// IEEE semantics: every comparison against NaN is false except `!=`.
fn float_matches(op: BinaryOp, l: f64, r: f64) -> bool {
    match op {
        BinaryOp::Equal => l == r,
        BinaryOp::NotEqual => l != r,
        BinaryOp::Less => l < r,
        BinaryOp::LessEqual => l <= r,
        BinaryOp::Greater => l > r,
        BinaryOp::GreaterEqual => l >= r,
        _ => unreachable!("non-comparison operator in comparison dispatch"),
    }
}

fn logical(left: Value, op: BinaryOp, right: Value) -> TermynusResult<Value> {
    match (&left, &right) {
        (Value::Boolean(l), Value::Boolean(r)) => {
            let result = match op {
                BinaryOp::And => *l && *r,
                BinaryOp::Or => *l || *r,
                _ => unreachable!("non-logical operator in logical dispatch"),
            };
            Ok(Value::Boolean(result))
        }
        _ => Err(invalid(op.symbol(), &left, &right)),
    }
}

fn bitwise(left: Value, op: BinaryOp, right: Value) -> TermynusResult<Value> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            let result = match op {
                BinaryOp::BitAnd => l & r,
                BinaryOp::BitOr => l | r,
                BinaryOp::BitXor => l ^ r,
                _ => unreachable!("non-bitwise operator in bitwise dispatch"),
            };
            Ok(Value::Integer(result))
        }
        _ => Err(invalid(op.symbol(), &left, &right)),
    }
}

fn shift(left: Value, op: BinaryOp, right: Value) -> TermynusResult<Value> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            if *r < 0 {
                return Err(EvalError::InvalidOperation {
                    message: format!("negative shift amount {}", r),
                }
                .into());
            }
            let amount = (*r).min(MAX_SHIFT) as u32;
            let result = match op {
                BinaryOp::ShiftLeft => l << amount,
                BinaryOp::ShiftRight => l >> amount,
                _ => unreachable!("non-shift operator in shift dispatch"),
            };
            Ok(Value::Integer(result))
        }
        _ => Err(invalid(op.symbol(), &left, &right)),
    }
}

/// Numeric projection for arithmetic: integers and floats only.
fn float_operand(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(v) => Some(*v as f64),
        Value::Float(v) => Some(*v),
        _ => None,
    }
}

/// Numeric projection for comparisons: booleans join in as 0/1.
fn comparable_operand(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(v) => Some(*v as f64),
        Value::Float(v) => Some(*v),
        Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn invalid(symbol: &str, left: &Value, right: &Value) -> crate::TermynusError {
    EvalError::InvalidOperation {
        message: format!(
            "'{}' is not defined for {} and {}",
            symbol,
            left.type_name(),
            right.type_name()
        ),
    }
    .into()
}
