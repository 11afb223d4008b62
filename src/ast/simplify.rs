//! Single-pass algebraic simplification.
//!
//! A subtree is constant when every variable it mentions is a known
//! constant. Constant subtrees are folded to literals, then a handful of
//! identities (`x + 0`, `x * 1`, `x ^ 0`, ...) are removed wherever an
//! immediate child is a literal. The pass is not iterated to a fixed point.

use crate::ast::{ExprNode, ExprTree, Operator};
use crate::error::Result;
use log::debug;
use std::collections::HashMap;

/// True if the subtree references no variable outside `constants`.
pub fn is_constant(node: &ExprNode, constants: &HashMap<String, f32>) -> bool {
    match node {
        ExprNode::Number(_) => true,
        ExprNode::Variable(name) => constants.contains_key(name),
        ExprNode::Function { argument, .. } => is_constant(argument, constants),
        ExprNode::Negate(inner) => is_constant(inner, constants),
        ExprNode::BinaryOperation { left, right, .. } => {
            is_constant(left, constants) && is_constant(right, constants)
        }
    }
}

impl ExprTree {
    /// Returns a simplified copy of this tree sharing the same context. The
    /// tree itself is left untouched.
    ///
    /// Fails only if folding has to evaluate a function that is not defined.
    pub fn simplify(&self) -> Result<ExprTree> {
        let root = self.simplify_node(self.root())?;
        let mut simplified =
            ExprTree::with_context(root, self.constants().clone(), self.functions().clone());
        simplified.extend_variables(
            self.variables()
                .iter()
                .map(|(name, value)| (name.clone(), *value)),
        );
        Ok(simplified)
    }

    fn fold(&self, node: &ExprNode) -> Result<ExprNode> {
        let value = self.evaluate_node(node, None)?;
        debug!("Folded {} to {}", node, value);
        Ok(ExprNode::Number(value))
    }

    fn simplify_node(&self, node: &ExprNode) -> Result<ExprNode> {
        let constants = self.constants();
        match node {
            ExprNode::Number(_) | ExprNode::Variable(_) => Ok(node.clone()),

            ExprNode::Function { name, argument } => {
                if is_constant(argument, constants) {
                    self.fold(node)
                } else {
                    Ok(ExprNode::Function {
                        name: name.clone(),
                        argument: Box::new(self.simplify_node(argument)?),
                    })
                }
            }

            ExprNode::Negate(inner) => {
                if is_constant(inner, constants) {
                    self.fold(node)
                } else {
                    Ok(ExprNode::negate(self.simplify_node(inner)?))
                }
            }

            ExprNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_constant = is_constant(left, constants);
                let right_constant = is_constant(right, constants);

                if left_constant && right_constant {
                    return self.fold(node);
                }

                let left = if left_constant {
                    self.fold(left)?
                } else {
                    self.simplify_node(left)?
                };
                let right = if right_constant {
                    self.fold(right)?
                } else {
                    self.simplify_node(right)?
                };

                Ok(eliminate_identity(left, *operator, right))
            }
        }
    }
}

/// Drops the operation when a literal child makes it an identity or forces its value.
fn eliminate_identity(left: ExprNode, operator: Operator, right: ExprNode) -> ExprNode {
    let left_value = left.as_number();
    let right_value = right.as_number();
    if left_value.is_none() && right_value.is_none() {
        return ExprNode::binary(left, operator, right);
    }

    let is = |value: Option<f32>, expected: f32| value == Some(expected);

    match operator {
        Operator::Add if is(left_value, 0.0) => right,
        Operator::Add if is(right_value, 0.0) => left,

        Operator::Subtract if is(right_value, 0.0) => left,
        Operator::Subtract if is(left_value, 0.0) => ExprNode::negate(right),

        Operator::Multiply if is(left_value, 0.0) || is(right_value, 0.0) => ExprNode::Number(0.0),
        Operator::Multiply if is(left_value, 1.0) => right,
        Operator::Multiply if is(right_value, 1.0) => left,

        Operator::Divide if is(right_value, 1.0) => left,

        Operator::Power if is(right_value, 0.0) || is(left_value, 1.0) => ExprNode::Number(1.0),
        Operator::Power if is(right_value, 1.0) => left,
        Operator::Power if is(left_value, 0.0) => ExprNode::Number(0.0),

        _ => ExprNode::binary(left, operator, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parse;
    use crate::error::{Error, UndefinedReference};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn simplified(source: &str) -> ExprNode {
        parse(source).unwrap().simplify().unwrap().into_root()
    }

    #[test]
    fn test_full_constant_folding() {
        assert_eq!(simplified("2+3"), ExprNode::Number(5.0));
        assert_eq!(simplified("(10 + 20) * 3 / (4 - 1)"), ExprNode::Number(30.0));
        assert_eq!(simplified("-(2*3)"), ExprNode::Number(-6.0));
    }

    #[test]
    fn test_additive_identity() {
        assert_eq!(simplified("x+0"), simplified("x"));
        assert_eq!(simplified("0+x"), ExprNode::variable("x"));
        assert_eq!(simplified("x-0"), ExprNode::variable("x"));
        assert_eq!(simplified("x+(3-3)"), ExprNode::variable("x"));
    }

    #[test]
    fn test_zero_minus_keeps_sign() {
        assert_eq!(simplified("0-x"), ExprNode::negate(ExprNode::variable("x")));
    }

    #[test]
    fn test_multiplicative_identities() {
        assert_eq!(simplified("x*0"), ExprNode::Number(0.0));
        assert_eq!(simplified("0*x"), ExprNode::Number(0.0));
        assert_eq!(simplified("1*x"), ExprNode::variable("x"));
        assert_eq!(simplified("x*(5-4)"), ExprNode::variable("x"));
        assert_eq!(simplified("x/1"), ExprNode::variable("x"));
        assert_eq!(
            simplified("1/x"),
            ExprNode::binary(ExprNode::Number(1.0), Operator::Divide, ExprNode::variable("x"))
        );
    }

    #[test]
    fn test_exponent_identities() {
        assert_eq!(simplified("x^0"), ExprNode::Number(1.0));
        assert_eq!(simplified("1^x"), ExprNode::Number(1.0));
        assert_eq!(simplified("x^1"), ExprNode::variable("x"));
        assert_eq!(simplified("0^x"), ExprNode::Number(0.0));
    }

    #[test]
    fn test_partial_folding() {
        assert_eq!(
            simplified("y + 2^3"),
            ExprNode::binary(ExprNode::variable("y"), Operator::Add, ExprNode::Number(8.0))
        );
        assert_eq!(
            simplified("(2*3)x"),
            ExprNode::binary(ExprNode::Number(6.0), Operator::Multiply, ExprNode::variable("x"))
        );
    }

    #[test]
    fn test_identities_apply_after_child_simplification() {
        assert_eq!(simplified("(x*0)+y"), ExprNode::variable("y"));
        assert_eq!(simplified("(x^1)*(y/1)"), simplified("x*y"));
    }

    #[test]
    fn test_constants_are_folded() {
        let mut tree = parse("c*x + 3*c").unwrap();
        tree.set_constant("c", 2.0);
        assert_eq!(
            tree.simplify().unwrap().into_root(),
            ExprNode::binary(
                ExprNode::binary(ExprNode::Number(2.0), Operator::Multiply, ExprNode::variable("x")),
                Operator::Add,
                ExprNode::Number(6.0),
            )
        );
    }

    #[test]
    fn test_variables_are_not_folded() {
        let mut tree = parse("x*2").unwrap();
        tree.set_variable("x", 3.0);
        let simple = tree.simplify().unwrap();
        assert_eq!(simple, tree);
        assert_eq!(simple.evaluate().unwrap(), 6.0);
    }

    #[test]
    fn test_functions_fold_through_library() {
        let mut tree = parse("sqrt(16)*x + sin(x)").unwrap();
        tree.load_standard_library();
        assert_eq!(
            tree.simplify().unwrap().into_root(),
            ExprNode::binary(
                ExprNode::binary(ExprNode::Number(4.0), Operator::Multiply, ExprNode::variable("x")),
                Operator::Add,
                ExprNode::function("sin", ExprNode::variable("x")),
            )
        );
    }

    #[test]
    fn test_undefined_function_while_folding() {
        let tree = parse("foo(2) + x").unwrap();
        assert_eq!(
            tree.simplify().unwrap_err(),
            Error::UndefinedReference(UndefinedReference::Function("foo".to_string()))
        );
    }

    #[test]
    fn test_unvisited_references_are_not_errors() {
        let tree = parse("x * foo(y)").unwrap();
        assert!(tree.simplify().is_ok());
    }

    #[test]
    fn test_input_is_untouched() {
        let tree = parse("x+0").unwrap();
        let before = tree.root().clone();
        let _ = tree.simplify().unwrap();
        assert_eq!(tree.root(), &before);
    }

    #[test]
    fn test_simplified_tree_keeps_context() {
        let mut tree = parse("k*x + 0").unwrap();
        tree.set_constant("k", 3.0);
        tree.set_variable("x", 2.0);
        let simple = tree.simplify().unwrap();
        assert_eq!(simple.evaluate().unwrap(), 6.0);
        assert_eq!(simple.constants().get("k"), Some(&3.0));
    }

    #[test]
    fn test_simplification_preserves_value() {
        let sources = [
            "x*1 + 0*y",
            "(2+3)*x - y/1",
            "x^1 + 2^2*y",
            "sin(0)*x + cos(0)*y",
            "-(2*3) + x*(1+1)",
            "(x+y)^(1) - 3*-2",
            "0 - x*y + exp(0)",
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for source in sources {
            let mut tree = parse(source).unwrap();
            tree.load_standard_library();
            let once = tree.simplify().unwrap();
            let twice = once.simplify().unwrap();

            for _ in 0..32 {
                let assignment = HashMap::from([
                    ("x".to_string(), rng.random_range(-5.0f32..5.0)),
                    ("y".to_string(), rng.random_range(-5.0f32..5.0)),
                ]);
                let expected = tree.evaluate_with(&assignment).unwrap();
                for candidate in [&once, &twice] {
                    let actual = candidate.evaluate_with(&assignment).unwrap();
                    let tolerance = 1e-4 * expected.abs().max(1.0);
                    assert!(
                        (expected - actual).abs() <= tolerance,
                        "{}: {} != {}",
                        source,
                        expected,
                        actual
                    );
                }
            }
        }
    }

    #[test]
    fn test_is_constant() {
        let constants = HashMap::from([("pi".to_string(), std::f32::consts::PI)]);
        let constant = parse("sin(pi/2) * -3").unwrap();
        let free = parse("pi * r^2").unwrap();
        assert!(is_constant(constant.root(), &constants));
        assert!(!is_constant(free.root(), &constants));
    }
}
