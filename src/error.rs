//! Error taxonomy for tokenizing and evaluating an expression.
//!
//! Every failure aborts the evaluation that produced it. Variants carry the
//! offending text and its byte offset in the input so callers can render a
//! message pointing at the problem.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// No token rule matches the remaining input.
    #[error("unexpected character {text:?} at position {position}")]
    Lexical { position: usize, text: String },

    /// A token appears where it cannot start or continue an expression.
    #[error("unexpected token {token:?} at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// A grouping or function call is never closed.
    #[error("missing closing parenthesis at position {position}")]
    MissingClosingParen { position: usize },

    /// A name followed by `(` is not a registered function.
    #[error("unrecognized function {name:?}")]
    UnrecognizedFunction { name: String },

    /// A `(` follows a value that is not a function name, as in `5(3)`.
    #[error("expected a function name before '(' at position {position}, found {found}")]
    NotAFunction { found: String, position: usize },

    /// An unknown name is used as a number.
    #[error("unresolved name {name:?}")]
    UnresolvedName { name: String },

    /// Sub-expressions are nested deeper than the configured limit.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("invalid numeric literal: {0}")]
    InvalidLiteral(#[from] std::num::ParseFloatError),
}
