//! JSON encodings used by the WebAssembly bridge.
//!
//! Tokens encode as `{"type", "value"}`. Nodes encode their kind plus a
//! `value` payload for literals, identifiers and operators, `name` and
//! `argCount` for functions, and `elementCount` for lists; tree nodes
//! additionally carry their children under `args`. Evaluation results
//! encode as `{"type", "value"}` with lists nesting the same shape and
//! functions encoding as null. Non-finite floats have no JSON form and
//! encode as null.

use crate::lexer::Token;
use crate::syntax::{Node, RpnNode};
use crate::value::Value;
use serde_json::{json, Value as Json};

pub fn token_to_json(token: &Token<'_>) -> Json {
    json!({ "type": token.kind, "value": token.text })
}

pub fn tokens_to_json(tokens: &[Token<'_>]) -> Json {
    Json::Array(tokens.iter().map(token_to_json).collect())
}

pub fn rpn_to_json(rpn: &[RpnNode]) -> Json {
    Json::Array(rpn.iter().map(rpn_node_to_json).collect())
}

fn rpn_node_to_json(node: &RpnNode) -> Json {
    match node {
        RpnNode::Integer(value) => json!({ "type": node.kind_name(), "value": value }),
        RpnNode::Float(value) => json!({ "type": node.kind_name(), "value": value }),
        RpnNode::Str(value) | RpnNode::Date(value) | RpnNode::Identifier(value) => {
            json!({ "type": node.kind_name(), "value": value })
        }
        RpnNode::Unary(op) => json!({ "type": node.kind_name(), "value": op.symbol() }),
        RpnNode::Binary(op) => json!({ "type": node.kind_name(), "value": op.symbol() }),
        RpnNode::Function { name, arg_count } => {
            json!({ "type": node.kind_name(), "name": name, "argCount": arg_count })
        }
        RpnNode::List { element_count } => {
            json!({ "type": node.kind_name(), "elementCount": element_count })
        }
    }
}

pub fn node_to_json(node: &Node) -> Json {
    match node {
        Node::Integer(value) => json!({ "type": node.kind_name(), "value": value }),
        Node::Float(value) => json!({ "type": node.kind_name(), "value": value }),
        Node::Str(value) | Node::Date(value) | Node::Identifier(value) => {
            json!({ "type": node.kind_name(), "value": value })
        }
        Node::Unary { op, operand } => json!({
            "type": node.kind_name(),
            "value": op.symbol(),
            "args": [node_to_json(operand)],
        }),
        Node::Binary { op, left, right } => json!({
            "type": node.kind_name(),
            "value": op.symbol(),
            "args": [node_to_json(left), node_to_json(right)],
        }),
        Node::Call { name, args } => json!({
            "type": node.kind_name(),
            "name": name,
            "argCount": args.len(),
            "args": args.iter().map(node_to_json).collect::<Vec<_>>(),
        }),
        Node::List(elements) => json!({
            "type": node.kind_name(),
            "elementCount": elements.len(),
            "args": elements.iter().map(node_to_json).collect::<Vec<_>>(),
        }),
    }
}

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Integer(v) => json!({ "type": "integer", "value": v }),
        Value::Float(v) => json!({ "type": "float", "value": v }),
        Value::Boolean(v) => json!({ "type": "boolean", "value": v }),
        Value::Str(s) => json!({ "type": "string", "value": s }),
        Value::Date(d) => json!({ "type": "date", "value": d }),
        Value::List(items) => json!({
            "type": "list",
            "value": items.iter().map(value_to_json).collect::<Vec<_>>(),
        }),
        Value::Function(_) | Value::Lambda(_) => json!({ "type": "function", "value": null }),
    }
}
