//! Lexically scoped binding environment.
//!
//! Each frame maps names to values and optionally points at a parent
//! frame. Lookup walks leaf-to-root, then falls through to the constants
//! table and the built-in registry. Insertion always writes the current
//! frame. A child frame borrows its parent and must not outlive it.

use crate::builtins;
use crate::value::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Environment<'a> {
    vars: HashMap<String, Value>,
    parent: Option<&'a Environment<'a>>,
}

impl<'a> Environment<'a> {
    /// A fresh root environment with no bindings of its own.
    pub fn new() -> Self {
        Environment {
            vars: HashMap::new(),
            parent: None,
        }
    }

    /// A nested frame whose lookups fall back to `self`.
    pub fn child(&self) -> Environment<'_> {
        Environment {
            vars: HashMap::new(),
            parent: Some(self),
        }
    }

    /// Resolve a name: frames leaf-to-root, then constants, then
    /// built-ins. Values are cloned out; the environment keeps its copy.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(value) = env.vars.get(name) {
                return Some(value.clone());
            }
            scope = env.parent;
        }
        builtins::constant(name).or_else(|| builtins::lookup(name).map(Value::Function))
    }

    /// Bind a name in the current frame, shadowing any outer binding.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }
}
