//! Runtime values.
//!
//! Composite values own their payloads outright: cloning a value is a
//! deep copy, dropping one releases strings and list elements
//! recursively. User-defined functions hold their body tree behind an
//! `Arc`, so the tree outlives every function value that references it.

use crate::builtins::BuiltinDef;
use crate::syntax::Node;
use std::fmt;
use std::sync::Arc;

/// A value produced by the evaluator, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Str(String),
    /// Opaque date body (`d'…'` with prefix and quotes stripped). Dates
    /// compare lexicographically and support no arithmetic.
    Date(String),
    List(Vec<Value>),
    /// A built-in from the registry.
    Function(BuiltinDef),
    /// A user-defined function installed by `def`.
    Lambda(Arc<UserFunction>),
}

/// A function defined from source: parameter names plus a parsed body.
#[derive(Debug, PartialEq)]
pub struct UserFunction {
    pub name: String,
    pub params: Vec<String>,
    pub body: Node,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::List(_) => "list",
            Value::Function(_) | Value::Lambda(_) => "function",
        }
    }

    /// Descriptive form for error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Integer(v) => format!("integer {}", v),
            Value::Float(v) => format!("float {}", v),
            Value::Boolean(v) => format!("boolean {}", v),
            Value::Str(s) => format!("string \"{}\"", s),
            Value::Date(d) => format!("date {}", d),
            Value::List(items) => format!("list of {} element(s)", items.len()),
            Value::Function(def) => format!("function {}", def.name),
            Value::Lambda(func) => format!("function {}", func.name),
        }
    }

    /// Text rendering used by `str.concat`: strings and dates appear
    /// without quotes, integers in decimal, floats and booleans with
    /// their default formatting.
    pub fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Date(d) => d.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Date(d) => write!(f, "{}", d),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Function(def) => write!(f, "<builtin {}>", def.name),
            Value::Lambda(func) => write!(f, "<function {}>", func.name),
        }
    }
}
