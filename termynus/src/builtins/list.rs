//! List built-ins. Every operation returns a new list; the inputs are
//! never mutated.

use super::string::byte_range;
use super::{expect_integer, expect_list, require_at_least, require_count};
use crate::env::Environment;
use crate::error::EvalError;
use crate::evaluator::call_value;
use crate::value::Value;
use crate::TermynusResult;

pub(super) fn length(args: &[Value]) -> TermynusResult<Value> {
    require_count("list.length", args, 1)?;
    let items = expect_list("list.length", &args[0])?;
    Ok(Value::Integer(items.len() as i64))
}

pub(super) fn get(args: &[Value]) -> TermynusResult<Value> {
    require_count("list.get", args, 2)?;
    let items = expect_list("list.get", &args[0])?;
    let index = expect_integer("list.get", &args[1])?;
    if index < 0 || index as usize >= items.len() {
        return Err(EvalError::IndexOutOfRange {
            index,
            len: items.len(),
        }
        .into());
    }
    Ok(items[index as usize].clone())
}

pub(super) fn append(args: &[Value]) -> TermynusResult<Value> {
    require_count("list.append", args, 2)?;
    let items = expect_list("list.append", &args[0])?;
    let mut out = items.to_vec();
    out.push(args[1].clone());
    Ok(Value::List(out))
}

pub(super) fn concat(args: &[Value]) -> TermynusResult<Value> {
    require_at_least("list.concat", args, 1)?;
    let mut out = Vec::new();
    for arg in args {
        out.extend(expect_list("list.concat", arg)?.iter().cloned());
    }
    Ok(Value::List(out))
}

/// `list.slice(l, start, end)` under the same bounds rule as
/// `str.substring`.
pub(super) fn slice(args: &[Value]) -> TermynusResult<Value> {
    require_count("list.slice", args, 3)?;
    let items = expect_list("list.slice", &args[0])?;
    let (start, end) = byte_range("list.slice", &args[1], &args[2], items.len())?;
    Ok(Value::List(items[start..end].to_vec()))
}

pub(super) fn map(env: &mut Environment<'_>, args: &[Value]) -> TermynusResult<Value> {
    require_count("list.map", args, 2)?;
    let items = expect_list("list.map", &args[0])?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(call_value(&args[1], std::slice::from_ref(item), env)?);
    }
    Ok(Value::List(out))
}

/// The predicate must produce a boolean for every element.
pub(super) fn filter(env: &mut Environment<'_>, args: &[Value]) -> TermynusResult<Value> {
    require_count("list.filter", args, 2)?;
    let items = expect_list("list.filter", &args[0])?;
    let mut out = Vec::new();
    for item in items {
        match call_value(&args[1], std::slice::from_ref(item), env)? {
            Value::Boolean(true) => out.push(item.clone()),
            Value::Boolean(false) => {}
            other => {
                return Err(EvalError::TypeError {
                    message: format!(
                        "list.filter predicate must return a boolean, got {}",
                        other.describe()
                    ),
                }
                .into())
            }
        }
    }
    Ok(Value::List(out))
}
