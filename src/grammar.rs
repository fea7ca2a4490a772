//! Binding powers and evaluation rules for every token kind.
//!
//! | kind                      | power | prefix         | infix            |
//! |---------------------------|-------|----------------|------------------|
//! | `Decimal`, `Integer`      | 1000  | literal value  |                  |
//! | `Name`                    | 1000  | name lookup    |                  |
//! | `+`                       | 10    |                | addition         |
//! | `-`                       | 10    | negation       | subtraction      |
//! | `*`, `/`                  | 20    |                | product/quotient |
//! | `^`                       | 30    |                | power (right)    |
//! | `(`                       | 50    | grouping       | function call    |
//! | `)`, end of input         | 0     |                |                  |
use crate::lexer::TokenKind;

pub const LITERAL_POWER: u32 = 1000;
pub const ADDITIVE_POWER: u32 = 10;
pub const MULTIPLICATIVE_POWER: u32 = 20;
pub const EXPONENT_POWER: u32 = 30;
pub const PAREN_POWER: u32 = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
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
    /// Applies the operator with IEEE-754 semantics: dividing by zero gives an
    /// infinity or `NaN` rather than an error.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => left.powf(right),
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrefixRule {
    /// A numeric literal yields its value.
    Literal,
    /// A name yields a constant, or stays pending as a function identifier.
    Name,
    /// Unary minus.
    Negate,
    /// A parenthesized sub-expression.
    Group,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InfixRule {
    Binary(Operator),
    /// Applies the pending function identifier on the left to one argument.
    Call,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrammarEntry {
    pub binding_power: u32,
    pub prefix: Option<PrefixRule>,
    pub infix: Option<InfixRule>,
}

impl GrammarEntry {
    const fn new(binding_power: u32, prefix: Option<PrefixRule>, infix: Option<InfixRule>) -> Self {
        Self {
            binding_power,
            prefix,
            infix,
        }
    }

    pub fn has_prefix_rule(&self) -> bool {
        self.prefix.is_some()
    }

    pub fn has_infix_rule(&self) -> bool {
        self.infix.is_some()
    }
}

pub const fn entry(kind: TokenKind) -> GrammarEntry {
    use InfixRule::{Binary, Call};
    match kind {
        TokenKind::Decimal | TokenKind::Integer => {
            GrammarEntry::new(LITERAL_POWER, Some(PrefixRule::Literal), None)
        }
        TokenKind::Name => GrammarEntry::new(LITERAL_POWER, Some(PrefixRule::Name), None),
        TokenKind::Plus => GrammarEntry::new(ADDITIVE_POWER, None, Some(Binary(Operator::Add))),
        TokenKind::Minus => GrammarEntry::new(
            ADDITIVE_POWER,
            Some(PrefixRule::Negate),
            Some(Binary(Operator::Subtract)),
        ),
        TokenKind::Star => {
            GrammarEntry::new(MULTIPLICATIVE_POWER, None, Some(Binary(Operator::Multiply)))
        }
        TokenKind::Slash => {
            GrammarEntry::new(MULTIPLICATIVE_POWER, None, Some(Binary(Operator::Divide)))
        }
        TokenKind::Caret => GrammarEntry::new(EXPONENT_POWER, None, Some(Binary(Operator::Power))),
        TokenKind::LParen => GrammarEntry::new(PAREN_POWER, Some(PrefixRule::Group), Some(Call)),
        TokenKind::RParen | TokenKind::EndOfInput => GrammarEntry::new(0, None, None),
    }
}

/// The binding power a following operator must beat to extend an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Threshold {
    power: u32,
    admits_equal: bool,
}

impl Threshold {
    /// Every operator extends an expression started at this threshold.
    pub const LOWEST: Threshold = Threshold::above(0);

    pub const fn above(power: u32) -> Self {
        Self {
            power,
            admits_equal: false,
        }
    }

    pub const fn at_least(power: u32) -> Self {
        Self {
            power,
            admits_equal: true,
        }
    }

    /// Threshold for the right operand of an operator with `power`.
    ///
    /// Equal-power operators stop a left-associative operand and continue a
    /// right-associative one.
    pub fn right_operand(power: u32, associativity: Associativity) -> Self {
        match associativity {
            Associativity::Left => Self::above(power),
            Associativity::Right => Self::at_least(power),
        }
    }

    pub fn admits(&self, power: u32) -> bool {
        power > self.power || (self.admits_equal && power == self.power)
    }
}
