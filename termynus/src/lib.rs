//! # Termynus
//!
//! An embeddable evaluator for a small expression language with
//! mixed-type values: integers, floats, booleans, strings, dates, lists,
//! and first-class functions.
//!
//! ## Quick Start
//!
//! ```rust
//! use termynus::{eval_str, Value};
//!
//! fn main() -> termynus::TermynusResult<()> {
//!     assert_eq!(eval_str("(5 + 3) * 2")?, Value::Integer(16));
//!     Ok(())
//! }
//! ```
//!
//! ## Parse once, evaluate many times
//!
//! A parse tree is pure data and can be reused across evaluations:
//!
//! ```rust
//! use termynus::{evaluate, parse, Environment, Value};
//!
//! fn main() -> termynus::TermynusResult<()> {
//!     let tree = parse("price * quantity")?;
//!
//!     let mut env = Environment::new();
//!     env.insert("price", Value::Integer(100));
//!     env.insert("quantity", Value::Integer(5));
//!
//!     assert_eq!(evaluate(&tree, &mut env)?, Value::Integer(500));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Source text is scanned into tokens, converted to a reverse-Polish
//! node stream by a shunting-yard pass, rebuilt into a tree, and walked
//! by the evaluator. Each stage is public; the CLI and the WebAssembly
//! bridge expose all of them.
//!
//! Identifiers resolve through the environment's scope chain, then a
//! constants table (`pi`, `e`, `tau`, `inf`, `nan`, `true`, `false`,
//! `empty`), then the built-in registry (`min`, `str.concat`,
//! `list.map`, ...). `def(name, params, body)` installs user-defined
//! functions at evaluation time.

pub mod builtins;
pub mod env;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod serializers;
pub mod syntax;
pub mod value;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use builtins::{BuiltinDef, BuiltinImpl};
pub use env::Environment;
pub use error::{EvalError, LexError, ParseError, TermynusError};
pub use evaluator::evaluate;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{build_tree, parse, parse_to_rpn, shunting_yard};
pub use syntax::{BinaryOp, Node, RpnNode, UnaryOp};
pub use value::{UserFunction, Value};

/// Result type for termynus operations.
pub type TermynusResult<T> = Result<T, TermynusError>;

/// Parse and evaluate in one step against a fresh environment.
pub fn eval_str(source: &str) -> TermynusResult<Value> {
    let tree = parse(source)?;
    let mut env = Environment::new();
    evaluate(&tree, &mut env)
}

#[cfg(test)]
mod tests;
