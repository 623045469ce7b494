//! String built-ins.
//!
//! `str.length` counts UTF-16 code units, which is the documented
//! contract; every other operation works on bytes. Case mapping and
//! trimming are ASCII-only.

use super::{expect_integer, expect_string, require_count};
use crate::error::EvalError;
use crate::value::Value;
use crate::TermynusResult;

/// `str.concat(...)` renders each argument to text and joins them.
pub(super) fn concat(args: &[Value]) -> TermynusResult<Value> {
    let mut out = String::new();
    for arg in args {
        out.push_str(&arg.render());
    }
    Ok(Value::Str(out))
}

pub(super) fn length(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.length", args, 1)?;
    let s = expect_string("str.length", &args[0])?;
    Ok(Value::Integer(s.encode_utf16().count() as i64))
}

/// `str.substring(s, start, end)` with `0 <= start <= end <= len` in
/// bytes. A cut through a multi-byte character is rejected.
pub(super) fn substring(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.substring", args, 3)?;
    let s = expect_string("str.substring", &args[0])?;
    let (start, end) = byte_range("str.substring", &args[1], &args[2], s.len())?;
    match s.get(start..end) {
        Some(slice) => Ok(Value::Str(slice.to_string())),
        None => Err(EvalError::InvalidOperation {
            message: format!(
                "substring {}..{} splits a multi-byte character",
                start, end
            ),
        }
        .into()),
    }
}

/// Replaces all non-overlapping occurrences.
pub(super) fn replace(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.replace", args, 3)?;
    let s = expect_string("str.replace", &args[0])?;
    let old = expect_string("str.replace", &args[1])?;
    let new = expect_string("str.replace", &args[2])?;
    Ok(Value::Str(s.replace(old, new)))
}

pub(super) fn to_upper(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.toUpper", args, 1)?;
    let s = expect_string("str.toUpper", &args[0])?;
    Ok(Value::Str(s.to_ascii_uppercase()))
}

pub(super) fn to_lower(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.toLower", args, 1)?;
    let s = expect_string("str.toLower", &args[0])?;
    Ok(Value::Str(s.to_ascii_lowercase()))
}

pub(super) fn trim(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.trim", args, 1)?;
    let s = expect_string("str.trim", &args[0])?;
    Ok(Value::Str(
        s.trim_matches(|c: char| c.is_ascii_whitespace()).to_string(),
    ))
}

pub(super) fn split(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.split", args, 2)?;
    let s = expect_string("str.split", &args[0])?;
    let separator = expect_string("str.split", &args[1])?;
    if separator.is_empty() {
        return Err(EvalError::InvalidOperation {
            message: "empty separator in str.split".to_string(),
        }
        .into());
    }
    Ok(Value::List(
        s.split(separator)
            .map(|part| Value::Str(part.to_string()))
            .collect(),
    ))
}

/// First byte index of `sub` in `s`, or -1.
pub(super) fn index_of(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.indexOf", args, 2)?;
    let s = expect_string("str.indexOf", &args[0])?;
    let sub = expect_string("str.indexOf", &args[1])?;
    Ok(Value::Integer(
        s.find(sub).map(|i| i as i64).unwrap_or(-1),
    ))
}

pub(super) fn contains(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.contains", args, 2)?;
    let s = expect_string("str.contains", &args[0])?;
    let sub = expect_string("str.contains", &args[1])?;
    Ok(Value::Boolean(s.contains(sub)))
}

pub(super) fn starts_with(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.startsWith", args, 2)?;
    let s = expect_string("str.startsWith", &args[0])?;
    let prefix = expect_string("str.startsWith", &args[1])?;
    Ok(Value::Boolean(s.starts_with(prefix)))
}

pub(super) fn ends_with(args: &[Value]) -> TermynusResult<Value> {
    require_count("str.endsWith", args, 2)?;
    let s = expect_string("str.endsWith", &args[0])?;
    let suffix = expect_string("str.endsWith", &args[1])?;
    Ok(Value::Boolean(s.ends_with(suffix)))
}

/// Validate a `start`/`end` pair against a length. Used by both the
/// substring and slice operations.
pub(super) fn byte_range(
    name: &str,
    start: &Value,
    end: &Value,
    len: usize,
) -> TermynusResult<(usize, usize)> {
    let start = expect_integer(name, start)?;
    let end = expect_integer(name, end)?;
    if start < 0 || end < start || end as usize > len {
        return Err(EvalError::InvalidOperation {
            message: format!("{} range {}..{} is invalid for length {}", name, start, end, len),
        }
        .into());
    }
    Ok((start as usize, end as usize))
}
