use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Variable,
    Function,
    LeftParen,
    RightParen,
    Sum,
    Subtract,
    Multiply,
    Divide,
    Exponent,
    Negate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    None,
}

impl TokenKind {
    /// Binding strength of an operator; non-operators have precedence 0.
    pub const fn precedence(self) -> u8 {
        match self {
            TokenKind::Sum | TokenKind::Subtract => 2,
            TokenKind::Multiply | TokenKind::Divide => 3,
            TokenKind::Exponent => 4,
            TokenKind::Negate => 5,
            _ => 0,
        }
    }

    pub const fn associativity(self) -> Associativity {
        match self {
            TokenKind::Sum | TokenKind::Subtract | TokenKind::Multiply | TokenKind::Divide => {
                Associativity::Left
            }
            TokenKind::Exponent | TokenKind::Negate => Associativity::Right,
            _ => Associativity::None,
        }
    }

    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Sum
                | TokenKind::Subtract
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Exponent
                | TokenKind::Negate
        )
    }

    /// True for tokens after which a `-` means subtraction and a value implies multiplication.
    pub const fn ends_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Variable | TokenKind::RightParen
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "Num",
            TokenKind::Variable => "Var",
            TokenKind::Function => "Fun",
            TokenKind::LeftParen => "lp",
            TokenKind::RightParen => "rp",
            TokenKind::Sum => "Sum",
            TokenKind::Subtract => "Sub",
            TokenKind::Multiply => "Mul",
            TokenKind::Divide => "Div",
            TokenKind::Exponent => "Exp",
            TokenKind::Negate => "Neg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token<Type: {} | Lexeme: {}>", self.kind.name(), self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        assert!(TokenKind::Sum.precedence() < TokenKind::Multiply.precedence());
        assert!(TokenKind::Multiply.precedence() < TokenKind::Exponent.precedence());
        assert!(TokenKind::Exponent.precedence() < TokenKind::Negate.precedence());
        assert_eq!(TokenKind::Sum.precedence(), TokenKind::Subtract.precedence());
        assert_eq!(TokenKind::LeftParen.precedence(), 0);
    }

    #[test]
    fn test_associativity() {
        assert_eq!(TokenKind::Divide.associativity(), Associativity::Left);
        assert_eq!(TokenKind::Exponent.associativity(), Associativity::Right);
        assert_eq!(TokenKind::Negate.associativity(), Associativity::Right);
        assert_eq!(TokenKind::Function.associativity(), Associativity::None);
    }

    #[test]
    fn test_operator_flags() {
        assert!(TokenKind::Negate.is_operator());
        assert!(!TokenKind::Function.is_operator());
        assert!(!TokenKind::LeftParen.is_operator());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Number, "3.25");
        assert_eq!(token.to_string(), "Token<Type: Num | Lexeme: 3.25>");
    }
}
