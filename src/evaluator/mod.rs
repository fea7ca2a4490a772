//! Precedence-climbing evaluation driven by the grammar table.
//!
//! Each call to [`Evaluator::evaluate`] scans and evaluates its input in one
//! pass. A token in prefix position starts a sub-expression; the following
//! operators extend it for as long as their binding power clears the
//! caller's threshold.
mod stream;

pub use stream::TokenStream;

use crate::error::{EvalError, Result};
use crate::functions::Registry;
use crate::grammar::{self, InfixRule, PrefixRule, Threshold};
use crate::lexer::{Token, TokenKind};
use log::{debug, trace};

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Deepest allowed nesting of sub-expressions.
    pub max_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The value of a (sub-)expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    /// A name that is not a constant, awaiting a `(` that applies it.
    PendingIdentifier(String),
}

impl Value {
    pub fn into_number(self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(n),
            Value::PendingIdentifier(name) => Err(EvalError::UnresolvedName { name }),
        }
    }
}

pub struct Evaluator<'r> {
    registry: &'r Registry,
    config: EvaluatorConfig,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_config(registry, EvaluatorConfig::default())
    }

    pub fn with_config(registry: &'r Registry, config: EvaluatorConfig) -> Self {
        Self { registry, config }
    }

    /// Evaluates `input` as a single expression.
    ///
    /// The whole input must be consumed: tokens left over once the expression
    /// ends are reported as unexpected.
    pub fn evaluate(&self, input: &str) -> Result<f64> {
        debug!("Evaluating expression: {}", input);
        let mut climber = Climber {
            stream: TokenStream::new(input)?,
            registry: self.registry,
            max_depth: self.config.max_depth,
            depth: 0,
        };

        let value = climber.expression(Threshold::LOWEST)?;
        let trailing = climber.stream.peek();
        if trailing.kind() != TokenKind::EndOfInput {
            return Err(unexpected_token(trailing));
        }

        let result = value.into_number()?;
        debug!("Result of {}: {}", input, result);
        Ok(result)
    }
}

fn unexpected_token(token: &Token) -> EvalError {
    EvalError::UnexpectedToken {
        token: token.to_string(),
        position: token.position(),
    }
}

/// Per-evaluation state: the token cursor and the current nesting depth.
struct Climber<'a, 'r> {
    stream: TokenStream<'a>,
    registry: &'r Registry,
    max_depth: usize,
    depth: usize,
}

impl Climber<'_, '_> {
    fn expression(&mut self, threshold: Threshold) -> Result<Value> {
        if self.depth >= self.max_depth {
            return Err(EvalError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let value = self.climb(threshold);
        self.depth -= 1;
        value
    }

    fn climb(&mut self, threshold: Threshold) -> Result<Value> {
        let token = self.stream.advance()?;
        let rules = grammar::entry(token.kind());
        let Some(prefix) = rules.prefix else {
            return Err(unexpected_token(&token));
        };
        let mut left = self.apply_prefix(prefix, &token, rules.binding_power)?;

        loop {
            let next = grammar::entry(self.stream.peek().kind());
            if !threshold.admits(next.binding_power) {
                break;
            }
            // A token without an infix rule ends this expression; the caller
            // decides whether it belongs there.
            let Some(infix) = next.infix else {
                break;
            };
            let token = self.stream.advance()?;
            left = self.apply_infix(infix, &token, next.binding_power, left)?;
        }

        Ok(left)
    }

    fn apply_prefix(&mut self, rule: PrefixRule, token: &Token, power: u32) -> Result<Value> {
        trace!("Prefix {:?} on {:?}", rule, token.text());
        match rule {
            PrefixRule::Literal => Ok(Value::Number(token.value()?)),
            PrefixRule::Name => Ok(self.resolve_name(token.text())),
            PrefixRule::Negate => {
                let operand = self.expression(Threshold::above(power))?.into_number()?;
                Ok(Value::Number(-operand))
            }
            PrefixRule::Group => {
                let inner = self.expression(Threshold::LOWEST)?;
                self.expect_closing_paren()?;
                Ok(inner)
            }
        }
    }

    fn apply_infix(
        &mut self,
        rule: InfixRule,
        token: &Token,
        power: u32,
        left: Value,
    ) -> Result<Value> {
        trace!("Infix {:?} on {:?}", rule, left);
        match rule {
            InfixRule::Binary(operator) => {
                let left = left.into_number()?;
                let threshold = Threshold::right_operand(power, operator.associativity());
                let right = self.expression(threshold)?.into_number()?;
                Ok(Value::Number(operator.apply(left, right)))
            }
            InfixRule::Call => {
                let name = match left {
                    Value::PendingIdentifier(name) => name,
                    Value::Number(n) => {
                        return Err(EvalError::NotAFunction {
                            found: n.to_string(),
                            position: token.position(),
                        })
                    }
                };
                let argument = self.expression(Threshold::above(power))?;
                self.expect_closing_paren()?;

                let function = self
                    .registry
                    .function(&name)
                    .ok_or(EvalError::UnrecognizedFunction { name })?;
                Ok(Value::Number(function(argument.into_number()?)))
            }
        }
    }

    fn resolve_name(&self, name: &str) -> Value {
        match self.registry.constant(name) {
            Some(value) => Value::Number(value),
            None => Value::PendingIdentifier(name.to_string()),
        }
    }

    fn expect_closing_paren(&mut self) -> Result<()> {
        if self.stream.advance_if(TokenKind::RParen)? {
            Ok(())
        } else {
            Err(EvalError::MissingClosingParen {
                position: self.stream.peek().position(),
            })
        }
    }
}
