use crate::ast::builder::build_tree;
use crate::ast::lexer::tokenize;
use crate::ast::token::{Associativity, Token, TokenKind};
use crate::ast::tree::ExprTree;
use crate::error::{Result, SyntaxError};
use log::debug;

/// Reorders an infix token stream into postfix with the shunting-yard algorithm.
///
/// Function names wait on the operator stack until the closing parenthesis of
/// their argument is reached, at which point they are emitted right after it.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen | TokenKind::Function => operators.push(token.clone()),

            TokenKind::RightParen => {
                loop {
                    match operators.pop() {
                        Some(top) if top.kind == TokenKind::LeftParen => break,
                        Some(top) => output.push(top),
                        None => return Err(SyntaxError::UnbalancedParentheses.into()),
                    }
                }

                if operators
                    .last()
                    .is_some_and(|top| top.kind == TokenKind::Function)
                {
                    output.extend(operators.pop());
                }
            }

            TokenKind::Number | TokenKind::Variable => output.push(token.clone()),

            TokenKind::Sum
            | TokenKind::Subtract
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Exponent
            | TokenKind::Negate => {
                let precedence = token.kind.precedence();
                let left_associative = token.kind.associativity() == Associativity::Left;

                while let Some(top) = operators.last() {
                    if !top.kind.is_operator() {
                        break;
                    }
                    let top_precedence = top.kind.precedence();
                    let should_pop = top_precedence > precedence
                        || (top_precedence == precedence && left_associative);
                    if !should_pop {
                        break;
                    }
                    output.extend(operators.pop());
                }

                operators.push(token.clone());
            }
        }
    }

    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(SyntaxError::UnbalancedParentheses.into());
        }
        output.push(top);
    }

    debug!("Postfix: {}", join_lexemes(&output));
    Ok(output)
}

/// Parses infix source text into an expression tree with an empty context.
pub fn parse(source: &str) -> Result<ExprTree> {
    debug!("Parsing expression: {}", source);
    let tokens = tokenize(source)?;
    let postfix = to_postfix(&tokens)?;
    let root = build_tree(&postfix)?;
    Ok(ExprTree::new(root))
}

/// Space-separated postfix lexemes of an infix expression, e.g. `"2 3 4 * +"`.
pub fn format_postfix(source: &str) -> Result<String> {
    let tokens = tokenize(source)?;
    Ok(join_lexemes(&to_postfix(&tokens)?))
}

fn join_lexemes(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
