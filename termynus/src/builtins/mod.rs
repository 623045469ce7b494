//! The built-in function registry and the constants table.
//!
//! Built-ins come in two shapes: pure functions over their evaluated
//! arguments, and functions that additionally need the calling
//! environment (`def`, `apply`, and the higher-order list operations).
//! Both tables are read-only process state, constructed once and never
//! mutated.

mod list;
mod math;
mod string;

use crate::env::Environment;
use crate::error::EvalError;
use crate::parser::parse;
use crate::value::{UserFunction, Value};
use crate::TermynusResult;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

pub type PureFn = fn(&[Value]) -> TermynusResult<Value>;
pub type EnvFn = fn(&mut Environment<'_>, &[Value]) -> TermynusResult<Value>;

/// The two built-in calling conventions.
#[derive(Debug, Clone, Copy)]
pub enum BuiltinImpl {
    Pure(PureFn),
    WithEnv(EnvFn),
}

/// One registry entry: a fixed name and its implementation.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDef {
    pub name: &'static str,
    pub call: BuiltinImpl,
}

// Registry names are unique, so identity is the name.
impl PartialEq for BuiltinDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

const fn pure(name: &'static str, call: PureFn) -> BuiltinDef {
    BuiltinDef {
        name,
        call: BuiltinImpl::Pure(call),
    }
}

const fn with_env(name: &'static str, call: EnvFn) -> BuiltinDef {
    BuiltinDef {
        name,
        call: BuiltinImpl::WithEnv(call),
    }
}

static BUILTINS: &[BuiltinDef] = &[
    // type conversions
    pure("int", math::to_int),
    pure("float", math::to_float),
    pure("bool", math::to_bool),
    // math
    pure("min", math::min),
    pure("max", math::max),
    pure("abs", math::abs),
    pure("floor", math::floor),
    pure("ceil", math::ceil),
    pure("sqrt", math::sqrt),
    pure("log", math::log),
    pure("log2", math::log2),
    pure("log10", math::log10),
    pure("exp", math::exp),
    pure("sin", math::sin),
    pure("cos", math::cos),
    pure("tan", math::tan),
    pure("asin", math::asin),
    pure("acos", math::acos),
    pure("atan", math::atan),
    pure("gcd", math::gcd),
    pure("mean", math::mean),
    pure("median", math::median),
    // strings
    pure("str.concat", string::concat),
    pure("str.length", string::length),
    pure("str.substring", string::substring),
    pure("str.replace", string::replace),
    pure("str.toUpper", string::to_upper),
    pure("str.toLower", string::to_lower),
    pure("str.trim", string::trim),
    pure("str.split", string::split),
    pure("str.indexOf", string::index_of),
    pure("str.contains", string::contains),
    pure("str.startsWith", string::starts_with),
    pure("str.endsWith", string::ends_with),
    // lists
    pure("list.length", list::length),
    pure("list.get", list::get),
    pure("list.append", list::append),
    pure("list.concat", list::concat),
    pure("list.slice", list::slice),
    with_env("list.map", list::map),
    with_env("list.filter", list::filter),
    // functions as values
    with_env("def", def),
    with_env("apply", apply),
];

static INDEX: LazyLock<HashMap<&'static str, BuiltinDef>> =
    LazyLock::new(|| BUILTINS.iter().map(|def| (def.name, *def)).collect());

/// Look up a built-in by its registry name.
pub fn lookup(name: &str) -> Option<BuiltinDef> {
    INDEX.get(name).copied()
}

/// The process-wide constants consulted after environment lookup.
pub fn constant(name: &str) -> Option<Value> {
    let value = match name {
        "pi" => Value::Float(std::f64::consts::PI),
        "e" => Value::Float(std::f64::consts::E),
        "tau" => Value::Float(std::f64::consts::TAU),
        "inf" => Value::Float(f64::INFINITY),
        "nan" => Value::Float(f64::NAN),
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        "empty" => Value::List(Vec::new()),
        _ => return None,
    };
    Some(value)
}

/// `def(name, params, body)` — parse `body`, install the resulting
/// function in the enclosing environment, and return it.
fn def(env: &mut Environment<'_>, args: &[Value]) -> TermynusResult<Value> {
    require_count("def", args, 3)?;
    let name = expect_string("def", &args[0])?;
    let params = match &args[1] {
        Value::List(items) => {
            let mut params = Vec::with_capacity(items.len());
            for item in items {
                params.push(expect_string("def", item)?.to_string());
            }
            params
        }
        other => {
            return Err(EvalError::TypeError {
                message: format!("def expects a list of parameter names, got {}", other.describe()),
            }
            .into())
        }
    };
    let body = expect_string("def", &args[2])?;
    let tree = parse(body)?;
    let lambda = Value::Lambda(Arc::new(UserFunction {
        name: name.to_string(),
        params,
        body: tree,
    }));
    env.insert(name, lambda.clone());
    Ok(lambda)
}

/// `apply(f, args)` — call a function value with a list of arguments.
fn apply(env: &mut Environment<'_>, args: &[Value]) -> TermynusResult<Value> {
    require_count("apply", args, 2)?;
    let call_args = match &args[1] {
        Value::List(items) => items.as_slice(),
        other => {
            return Err(EvalError::TypeError {
                message: format!("apply expects an argument list, got {}", other.describe()),
            }
            .into())
        }
    };
    crate::evaluator::call_value(&args[0], call_args, env)
}

// Shared argument helpers for the registry modules.

pub(crate) fn require_count(name: &str, args: &[Value], count: usize) -> TermynusResult<()> {
    if args.len() != count {
        return Err(EvalError::InvalidArgumentCount {
            name: name.to_string(),
            expected: count.to_string(),
            found: args.len(),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn require_at_least(name: &str, args: &[Value], count: usize) -> TermynusResult<()> {
    if args.len() < count {
        return Err(EvalError::InvalidArgumentCount {
            name: name.to_string(),
            expected: format!("at least {}", count),
            found: args.len(),
        }
        .into());
    }
    Ok(())
}

/// Numeric projection: integers and floats (and booleans as 0/1, which
/// the conversions accept).
pub(crate) fn expect_number(name: &str, value: &Value) -> TermynusResult<f64> {
    match value {
        Value::Integer(v) => Ok(*v as f64),
        Value::Float(v) => Ok(*v),
        Value::Boolean(v) => Ok(if *v { 1.0 } else { 0.0 }),
        other => Err(EvalError::TypeError {
            message: format!("{} expects a number, got {}", name, other.describe()),
        }
        .into()),
    }
}

pub(crate) fn expect_integer(name: &str, value: &Value) -> TermynusResult<i64> {
    match value {
        Value::Integer(v) => Ok(*v),
        other => Err(EvalError::TypeError {
            message: format!("{} expects an integer, got {}", name, other.describe()),
        }
        .into()),
    }
}

pub(crate) fn expect_string<'v>(name: &str, value: &'v Value) -> TermynusResult<&'v str> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(EvalError::TypeError {
            message: format!("{} expects a string, got {}", name, other.describe()),
        }
        .into()),
    }
}

pub(crate) fn expect_list<'v>(name: &str, value: &'v Value) -> TermynusResult<&'v [Value]> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(EvalError::TypeError {
            message: format!("{} expects a list, got {}", name, other.describe()),
        }
        .into()),
    }
}
