//! Two-stage parser: shunting-yard to RPN, then stack reconstruction
//! into a tree. The stages are public individually for callers that want
//! the intermediate stream (the CLI and the wasm bridge expose both).

mod shunting;
mod tree;

pub use shunting::shunting_yard;
pub use tree::build_tree;

use crate::lexer::tokenize;
use crate::syntax::{Node, RpnNode};
use crate::TermynusResult;

/// Parse source text into a tree, ready for evaluation.
pub fn parse(source: &str) -> TermynusResult<Node> {
    let tokens = tokenize(source)?;
    let rpn = shunting_yard(&tokens)?;
    build_tree(rpn)
}

/// Parse source text up to the RPN stage.
pub fn parse_to_rpn(source: &str) -> TermynusResult<Vec<RpnNode>> {
    let tokens = tokenize(source)?;
    shunting_yard(&tokens)
}
