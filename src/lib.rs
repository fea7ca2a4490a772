//! Arithmetic expression evaluation driven by binding powers.
//!
//! ```
//! assert_eq!(equation_parser::parse_and_evaluate("2^3^2"), Ok(512.0));
//! assert_eq!(equation_parser::parse_and_evaluate("(2 + 3) * sqrt(16)"), Ok(20.0));
//! ```
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod grammar;
pub mod lexer;

pub use error::{EvalError, Result};
pub use evaluator::{Evaluator, EvaluatorConfig, TokenStream, Value};
pub use functions::Registry;
pub use lexer::{tokenize, Lexer, Token, TokenKind};

use rayon::prelude::*;

/// Evaluates `input` against the standard constants and functions.
pub fn parse_and_evaluate(input: &str) -> Result<f64> {
    evaluate_with(input, Registry::shared(), EvaluatorConfig::default())
}

pub fn evaluate_with(input: &str, registry: &Registry, config: EvaluatorConfig) -> Result<f64> {
    Evaluator::with_config(registry, config).evaluate(input)
}

/// Evaluates independent expressions in parallel, sharing one registry.
///
/// Results are returned in input order.
pub fn evaluate_batch<S>(inputs: &[S], registry: &Registry) -> Vec<Result<f64>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| Evaluator::new(registry).evaluate(input.as_ref()))
        .collect()
}
