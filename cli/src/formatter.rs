//! Plain-text rendering of the pipeline stages.

use termynus::{Node, RpnNode, Token};

/// Numbered token listing for `--parse`.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(&format!("{:>3}: {:<14} {}\n", i, token.kind.name(), token.text));
    }
    out
}

/// One RPN node per line for `--rpn`.
pub fn format_rpn(rpn: &[RpnNode]) -> String {
    let mut out = String::new();
    for node in rpn {
        out.push_str(&rpn_line(node));
        out.push('\n');
    }
    out
}

fn rpn_line(node: &RpnNode) -> String {
    match node {
        RpnNode::Integer(value) => format!("{} {}", node.kind_name(), value),
        RpnNode::Float(value) => format!("{} {}", node.kind_name(), value),
        RpnNode::Str(value) | RpnNode::Date(value) | RpnNode::Identifier(value) => {
            format!("{} {}", node.kind_name(), value)
        }
        RpnNode::Unary(op) => format!("{} {}", node.kind_name(), op),
        RpnNode::Binary(op) => format!("{} {}", node.kind_name(), op),
        RpnNode::Function { name, arg_count } => {
            format!("{} {}/{}", node.kind_name(), name, arg_count)
        }
        RpnNode::List { element_count } => format!("{}/{}", node.kind_name(), element_count),
    }
}

/// Depth-indented tree listing for `--tree`.
pub fn format_tree(tree: &Node) -> String {
    let mut out = String::new();
    write_node(tree, 0, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Integer(value) => out.push_str(&format!("{}{} {}\n", indent, node.kind_name(), value)),
        Node::Float(value) => out.push_str(&format!("{}{} {}\n", indent, node.kind_name(), value)),
        Node::Str(value) | Node::Date(value) | Node::Identifier(value) => {
            out.push_str(&format!("{}{} {}\n", indent, node.kind_name(), value))
        }
        Node::Unary { op, operand } => {
            out.push_str(&format!("{}{} {}\n", indent, node.kind_name(), op));
            write_node(operand, depth + 1, out);
        }
        Node::Binary { op, left, right } => {
            out.push_str(&format!("{}{} {}\n", indent, node.kind_name(), op));
            write_node(left, depth + 1, out);
            write_node(right, depth + 1, out);
        }
        Node::Call { name, args } => {
            out.push_str(&format!("{}{} {}/{}\n", indent, node.kind_name(), name, args.len()));
            for arg in args {
                write_node(arg, depth + 1, out);
            }
        }
        Node::List(elements) => {
            out.push_str(&format!("{}{}/{}\n", indent, node.kind_name(), elements.len()));
            for element in elements {
                write_node(element, depth + 1, out);
            }
        }
    }
}
