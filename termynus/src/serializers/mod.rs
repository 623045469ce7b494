//! Wire encodings for tokens, RPN streams, parse trees, and values.

pub mod json;
