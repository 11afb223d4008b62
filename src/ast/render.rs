//! Text renderers for expression trees.
//!
//! Both renderers are fixed templates per node kind. Neither inserts
//! parentheses beyond what its templates contain, so the output does not
//! always parse back to the same tree.

use crate::ast::{ExprNode, ExprTree, Operator};
use std::fmt;

impl ExprNode {
    /// LaTeX source for the subtree, literals printed with `decimals` fixed places.
    pub fn to_latex(&self, decimals: usize) -> String {
        match self {
            ExprNode::Variable(name) => name.clone(),
            ExprNode::Number(value) => format!("{:.*}", decimals, value),
            ExprNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left = left.to_latex(decimals);
                let right = right.to_latex(decimals);
                match operator {
                    Operator::Add => format!("{} + {}", left, right),
                    Operator::Subtract => format!("{} - {}", left, right),
                    Operator::Power => format!("{}^{{{}}}", left, right),
                    Operator::Multiply => format!("{} *({})", left, right),
                    Operator::Divide => format!("\\frac{{{}}}{{{}}}", left, right),
                }
            }
            ExprNode::Negate(inner) => format!("-{}", inner.to_latex(decimals)),
            ExprNode::Function { name, argument } => {
                format!("{}({})", name, argument.to_latex(decimals))
            }
        }
    }

    /// Plain infix text for the subtree.
    ///
    /// Products are written by juxtaposition with nothing between the
    /// operands, so `x*y` renders as `xy`.
    pub fn to_infix(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprNode::Variable(name) => write!(f, "{}", name),
            ExprNode::Number(value) => write!(f, "{:.6}", value),
            ExprNode::Function { name, argument } => write!(f, "{}({})", name, argument),
            ExprNode::BinaryOperation {
                left,
                operator,
                right,
            } => match operator {
                Operator::Add => write!(f, "{} + {}", left, right),
                Operator::Subtract => write!(f, "{} - {}", left, right),
                Operator::Multiply => write!(f, "{}{}", left, right),
                Operator::Power => write!(f, "({})^({})", left, right),
                Operator::Divide => write!(f, "({})/({})", left, right),
            },
            ExprNode::Negate(inner) => write!(f, "-{}", inner),
        }
    }
}

impl ExprTree {
    pub fn render_latex(&self, decimals: usize) -> String {
        self.root().to_latex(decimals)
    }

    pub fn to_infix(&self) -> String {
        self.root().to_infix()
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}
