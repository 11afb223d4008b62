use std::collections::BTreeSet;

mod builder;
mod lexer;
mod parser;
mod render;
mod simplify;
mod token;
mod tree;

pub use builder::build_tree;
pub use lexer::{tokenize, Lexer};
pub use parser::{format_postfix, parse, to_postfix};
pub use simplify::is_constant;
pub use token::{Associativity, Token, TokenKind};
pub use tree::{ExprTree, Function};

/// A node of an expression tree. Each variant carries exactly the children
/// its arity requires and owns them outright.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    Number(f32),
    Variable(String),
    Function {
        name: String,
        argument: Box<ExprNode>,
    },
    Negate(Box<ExprNode>),
    BinaryOperation {
        left: Box<ExprNode>,
        operator: Operator,
        right: Box<ExprNode>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f32, right: f32) -> f32 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => left.powf(right),
        }
    }
}

impl TryFrom<TokenKind> for Operator {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Sum => Ok(Operator::Add),
            TokenKind::Subtract => Ok(Operator::Subtract),
            TokenKind::Multiply => Ok(Operator::Multiply),
            TokenKind::Divide => Ok(Operator::Divide),
            TokenKind::Exponent => Ok(Operator::Power),
            other => Err(other),
        }
    }
}

impl ExprNode {
    pub fn number(value: f32) -> Self {
        ExprNode::Number(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        ExprNode::Variable(name.into())
    }

    pub fn function(name: impl Into<String>, argument: ExprNode) -> Self {
        ExprNode::Function {
            name: name.into(),
            argument: Box::new(argument),
        }
    }

    pub fn negate(inner: ExprNode) -> Self {
        ExprNode::Negate(Box::new(inner))
    }

    pub fn binary(left: ExprNode, operator: Operator, right: ExprNode) -> Self {
        ExprNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        if let ExprNode::Number(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Names of every variable referenced anywhere in the subtree.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            ExprNode::Number(_) => {}
            ExprNode::Variable(name) => {
                names.insert(name.as_str());
            }
            ExprNode::Function { argument, .. } => argument.collect_variables(names),
            ExprNode::Negate(inner) => inner.collect_variables(names),
            ExprNode::BinaryOperation { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            ExprNode::Number(_) | ExprNode::Variable(_) => 1,
            ExprNode::Function { argument, .. } => 1 + argument.node_count(),
            ExprNode::Negate(inner) => 1 + inner.node_count(),
            ExprNode::BinaryOperation { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            ExprNode::Number(_) | ExprNode::Variable(_) => 1,
            ExprNode::Function { argument, .. } => 1 + argument.depth(),
            ExprNode::Negate(inner) => 1 + inner.depth(),
            ExprNode::BinaryOperation { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert!((Operator::Power.apply(2.0, 0.5) - 2f32.sqrt()).abs() < 1e-6);
        assert!(Operator::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_operator_from_token_kind() {
        assert_eq!(Operator::try_from(TokenKind::Exponent), Ok(Operator::Power));
        assert_eq!(
            Operator::try_from(TokenKind::Negate),
            Err(TokenKind::Negate)
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ExprNode::binary(ExprNode::variable("x"), Operator::Add, ExprNode::number(1.0));
        let mut copy = original.clone();
        if let ExprNode::BinaryOperation { right, .. } = &mut copy {
            **right = ExprNode::number(2.0);
        }
        assert_ne!(original, copy);
        assert_eq!(
            original,
            ExprNode::binary(ExprNode::variable("x"), Operator::Add, ExprNode::number(1.0))
        );
    }

    #[test]
    fn test_introspection() {
        let node = ExprNode::binary(
            ExprNode::function("sin", ExprNode::variable("x")),
            Operator::Multiply,
            ExprNode::negate(ExprNode::binary(
                ExprNode::variable("y"),
                Operator::Add,
                ExprNode::variable("x"),
            )),
        );
        assert_eq!(node.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(node.node_count(), 7);
        assert_eq!(node.depth(), 4);
    }
}
