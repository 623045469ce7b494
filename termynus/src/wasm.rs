//! WebAssembly bridge.
//!
//! Every export takes the expression source and returns a JSON string;
//! wasm-bindgen owns the buffer marshalling on both sides. Failures come
//! back as an `{"error": …}` object rather than an exception.

use crate::env::Environment;
use crate::error::TermynusError;
use crate::serializers::json;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = tokenize)]
pub fn tokenize(expression: &str) -> String {
    match crate::lexer::tokenize(expression) {
        Ok(tokens) => json::tokens_to_json(&tokens).to_string(),
        Err(err) => error_json(&err.into()),
    }
}

#[wasm_bindgen(js_name = shuntingYard)]
pub fn shunting_yard(expression: &str) -> String {
    match crate::parser::parse_to_rpn(expression) {
        Ok(rpn) => json::rpn_to_json(&rpn).to_string(),
        Err(err) => error_json(&err),
    }
}

#[wasm_bindgen(js_name = parseToTree)]
pub fn parse_to_tree(expression: &str) -> String {
    match crate::parser::parse(expression) {
        Ok(tree) => json::node_to_json(&tree).to_string(),
        Err(err) => error_json(&err),
    }
}

#[wasm_bindgen(js_name = evaluate)]
pub fn evaluate(expression: &str) -> String {
    let result = crate::parser::parse(expression).and_then(|tree| {
        let mut env = Environment::new();
        crate::evaluator::evaluate(&tree, &mut env)
    });
    match result {
        Ok(value) => json::value_to_json(&value).to_string(),
        Err(err) => error_json(&err),
    }
}

fn error_json(err: &TermynusError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}
