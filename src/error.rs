use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way parsing, evaluating or simplifying an expression can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    UndefinedReference(#[from] UndefinedReference),

    /// A node or token outside the documented set reached a stage that cannot handle it.
    #[error("invalid node: {0}")]
    InvariantViolation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character '{character}' at position {position}")]
pub struct LexicalError {
    pub character: char,
    /// Zero-based character offset into the source text.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unbalanced parentheses in expression")]
    UnbalancedParentheses,

    #[error("operator '{token}' is missing an operand")]
    StackUnderflow { token: String },

    #[error("malformed expression: {count} operands were left without an operator")]
    DanglingOperands { count: usize },

    #[error("empty expression")]
    EmptyExpression,

    #[error("invalid numeric literal '{lexeme}'")]
    InvalidNumber { lexeme: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UndefinedReference {
    #[error("variable '{0}' undefined")]
    Variable(String),

    #[error("function '{0}' undefined")]
    Function(String),
}

impl UndefinedReference {
    /// The identifier that could not be resolved.
    pub fn name(&self) -> &str {
        match self {
            UndefinedReference::Variable(name) | UndefinedReference::Function(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_error_message() {
        let err: Error = LexicalError {
            character: '@',
            position: 4,
        }
        .into();
        assert_eq!(err.to_string(), "unexpected character '@' at position 4");
    }

    #[test]
    fn test_undefined_reference_name() {
        let err = UndefinedReference::Function("sin".to_string());
        assert_eq!(err.name(), "sin");
        assert_eq!(Error::from(err).to_string(), "function 'sin' undefined");
    }
}
