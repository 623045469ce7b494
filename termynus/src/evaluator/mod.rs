//! Tree-walking evaluation.
//!
//! One central dispatch over the node kinds; the operator arms live in
//! [`operations`]. Arguments, list elements, and binary operands are all
//! evaluated strictly left-to-right, and `and`/`or` evaluate both sides.

pub mod operations;

use crate::builtins::BuiltinImpl;
use crate::env::Environment;
use crate::error::EvalError;
use crate::syntax::Node;
use crate::value::Value;
use crate::TermynusResult;

/// Evaluate a parse tree against an environment.
pub fn evaluate(node: &Node, env: &mut Environment<'_>) -> TermynusResult<Value> {
    match node {
        Node::Integer(value) => Ok(Value::Integer(*value)),
        Node::Float(value) => Ok(Value::Float(*value)),
        Node::Str(value) => Ok(Value::Str(value.clone())),
        Node::Date(value) => Ok(Value::Date(value.clone())),
        Node::Identifier(name) => env.get(name).ok_or_else(|| {
            EvalError::UndefinedIdentifier {
                name: name.clone(),
            }
            .into()
        }),
        Node::Unary { op, operand } => {
            let value = evaluate(operand, env)?;
            operations::unary_operation(*op, value)
        }
        Node::Binary { op, left, right } => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            operations::binary_operation(left, *op, right)
        }
        Node::Call { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate(arg, env)?);
            }
            let callee = env.get(name).ok_or(EvalError::UndefinedIdentifier {
                name: name.clone(),
            })?;
            call_value(&callee, &values, env)
        }
        Node::List(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(evaluate(element, env)?);
            }
            Ok(Value::List(items))
        }
    }
}

/// Call a function value with already-evaluated arguments.
///
/// Built-ins dispatch through their registry entry; lambdas get a child
/// frame of the caller's environment with each parameter bound.
pub fn call_value(
    callee: &Value,
    args: &[Value],
    env: &mut Environment<'_>,
) -> TermynusResult<Value> {
    match callee {
        Value::Function(def) => match def.call {
            BuiltinImpl::Pure(call) => call(args),
            BuiltinImpl::WithEnv(call) => call(env, args),
        },
        Value::Lambda(func) => {
            if args.len() != func.params.len() {
                return Err(EvalError::InvalidArgumentCount {
                    name: func.name.clone(),
                    expected: func.params.len().to_string(),
                    found: args.len(),
                }
                .into());
            }
            let mut frame = env.child();
            for (param, value) in func.params.iter().zip(args) {
                frame.insert(param.clone(), value.clone());
            }
            evaluate(&func.body, &mut frame)
        }
        other => Err(EvalError::TypeError {
            message: format!("{} is not callable", other.describe()),
        }
        .into()),
    }
}
