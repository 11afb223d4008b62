pub mod ast;
pub mod cache;
pub mod error;
pub mod functions;

pub use ast::{parse, ExprNode, ExprTree, Operator};
pub use cache::ParseCache;
pub use error::{Error, LexicalError, Result, SyntaxError, UndefinedReference};
pub use functions::Library;

use std::collections::HashMap;

/// Parses `expression`, loads the standard library and evaluates it with `variables`.
pub fn evaluate_expression(expression: &str, variables: &HashMap<String, f32>) -> Result<f32> {
    let mut tree = parse(expression)?;
    tree.load_standard_library();
    tree.evaluate_with(variables)
}
