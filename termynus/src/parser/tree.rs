//! RPN-to-tree reconstruction.
//!
//! Walks the flat stream with a node stack; operators and calls pull
//! their operands back off the stack, transferring ownership into the
//! finished tree. A well-formed stream leaves exactly one node.

use crate::error::ParseError;
use crate::syntax::{Node, RpnNode};
use crate::TermynusResult;

/// Build a parse tree from an RPN stream.
pub fn build_tree(rpn: Vec<RpnNode>) -> TermynusResult<Node> {
    if rpn.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let mut stack: Vec<Node> = Vec::new();
    for entry in rpn {
        match entry {
            RpnNode::Integer(value) => stack.push(Node::Integer(value)),
            RpnNode::Float(value) => stack.push(Node::Float(value)),
            RpnNode::Str(value) => stack.push(Node::Str(value)),
            RpnNode::Date(value) => stack.push(Node::Date(value)),
            RpnNode::Identifier(name) => stack.push(Node::Identifier(name)),
            RpnNode::Unary(op) => {
                let operand = stack.pop().ok_or_else(|| {
                    ParseError::MalformedExpression(format!(
                        "operator '{}' is missing its operand",
                        op
                    ))
                })?;
                stack.push(Node::Unary {
                    op,
                    operand: Box::new(operand),
                });
            }
            RpnNode::Binary(op) => {
                let right = stack.pop();
                let left = stack.pop();
                match (left, right) {
                    (Some(left), Some(right)) => stack.push(Node::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    }),
                    _ => {
                        return Err(ParseError::MalformedExpression(format!(
                            "operator '{}' is missing an operand",
                            op
                        ))
                        .into())
                    }
                }
            }
            RpnNode::Function { name, arg_count } => {
                let args = pop_operands(&mut stack, arg_count, &name)?;
                stack.push(Node::Call { name, args });
            }
            RpnNode::List { element_count } => {
                let elements = pop_operands(&mut stack, element_count, "list literal")?;
                stack.push(Node::List(elements));
            }
        }
    }

    if stack.len() != 1 {
        return Err(ParseError::MalformedExpression(format!(
            "{} values left over after reconstruction",
            stack.len()
        ))
        .into());
    }
    Ok(stack.remove(0))
}

/// Detach the last `count` nodes in their original (call/listed) order.
fn pop_operands(stack: &mut Vec<Node>, count: usize, what: &str) -> TermynusResult<Vec<Node>> {
    if stack.len() < count {
        return Err(ParseError::MalformedExpression(format!(
            "{} expects {} operand(s), found {}",
            what,
            count,
            stack.len()
        ))
        .into());
    }
    Ok(stack.split_off(stack.len() - count))
}
