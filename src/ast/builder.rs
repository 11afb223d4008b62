use crate::ast::token::{Token, TokenKind};
use crate::ast::{ExprNode, Operator};
use crate::error::{Error, Result, SyntaxError};
use log::debug;

fn pop_operand(stack: &mut Vec<ExprNode>, token: &Token) -> Result<Box<ExprNode>> {
    stack.pop().map(Box::new).ok_or_else(|| {
        SyntaxError::StackUnderflow {
            token: token.lexeme.clone(),
        }
        .into()
    })
}

/// Builds a single expression tree from a postfix token stream.
pub fn build_tree(postfix: &[Token]) -> Result<ExprNode> {
    let mut stack: Vec<ExprNode> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let node = match token.kind {
            TokenKind::Number => {
                let value = token.lexeme.parse::<f32>().map_err(|_| {
                    SyntaxError::InvalidNumber {
                        lexeme: token.lexeme.clone(),
                    }
                })?;
                ExprNode::Number(value)
            }
            TokenKind::Variable => ExprNode::Variable(token.lexeme.clone()),
            TokenKind::Function => ExprNode::Function {
                name: token.lexeme.clone(),
                argument: pop_operand(&mut stack, token)?,
            },
            TokenKind::Negate => ExprNode::Negate(pop_operand(&mut stack, token)?),
            TokenKind::Sum
            | TokenKind::Subtract
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Exponent => {
                // operands come off the stack in reverse order
                let right = pop_operand(&mut stack, token)?;
                let left = pop_operand(&mut stack, token)?;
                let operator = Operator::try_from(token.kind).map_err(|kind| {
                    Error::InvariantViolation(format!("{:?} is not a binary operator", kind))
                })?;
                ExprNode::BinaryOperation {
                    left,
                    operator,
                    right,
                }
            }
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(Error::InvariantViolation(format!(
                    "unexpected '{}' in postfix stream",
                    token.lexeme
                )))
            }
        };
        stack.push(node);
    }

    if stack.len() > 1 {
        return Err(SyntaxError::DanglingOperands { count: stack.len() }.into());
    }
    let root = stack.pop().ok_or(SyntaxError::EmptyExpression)?;

    debug!("Built tree: {:?}", root);
    Ok(root)
}
