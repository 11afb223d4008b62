use crate::ast::token::{Token, TokenKind};
use crate::error::{LexicalError, Result};
use log::trace;

/// Splits infix source text into tokens.
///
/// Implicit multiplication (`2x`, `x(y)`, `(a)(b)`) is made explicit by
/// inserting a `*` token, and every `-` is classified as either subtraction
/// or unary negation from the token that precedes it.
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            tokens: Vec::new(),
        }
    }

    /// Consumes the whole source and returns its tokens.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while self.index < self.chars.len() {
            self.scan()?;
        }
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn previous_ends_operand(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind.ends_operand())
    }

    fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    fn push_implicit_multiplication(&mut self) {
        if self.previous_ends_operand() {
            self.push(Token::new(TokenKind::Multiply, "*"));
        }
    }

    fn scan(&mut self) -> Result<()> {
        let position = self.index;
        let Some(current) = self.peek() else {
            return Ok(());
        };

        if matches!(current, ' ' | '\t' | '\n' | '\r') {
            self.index += 1;
            return Ok(());
        }

        if current.is_ascii_alphabetic() {
            self.push_implicit_multiplication();
            self.consume_identifier();
            return Ok(());
        }

        if current.is_ascii_digit() {
            self.push_implicit_multiplication();
            self.consume_number();
            return Ok(());
        }

        let kind = match current {
            '+' => TokenKind::Sum,
            '-' if self.previous_ends_operand() => TokenKind::Subtract,
            '-' => TokenKind::Negate,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '^' => TokenKind::Exponent,
            '(' => {
                self.push_implicit_multiplication();
                TokenKind::LeftParen
            }
            ')' => TokenKind::RightParen,
            character => {
                return Err(LexicalError {
                    character,
                    position,
                }
                .into())
            }
        };

        self.index += 1;
        self.push(Token::new(kind, current));
        Ok(())
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.index;
        while self.peek().is_some_and(&predicate) {
            self.index += 1;
        }
        self.chars[start..self.index].iter().collect()
    }

    fn consume_number(&mut self) {
        let mut lexeme = self.take_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.index += 1;
            lexeme.push('.');
            lexeme.push_str(&self.take_while(|c| c.is_ascii_digit()));
        }
        self.push(Token::new(TokenKind::Number, lexeme));
    }

    fn consume_identifier(&mut self) {
        let name = self.take_while(|c| c.is_ascii_alphabetic());
        // only an immediately following '(' makes this a call
        let kind = if self.peek() == Some('(') {
            TokenKind::Function
        } else {
            TokenKind::Variable
        };
        self.push(Token::new(kind, name));
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}
