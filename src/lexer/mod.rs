use crate::error::{EvalError, Result};
use log::trace;
use pest::Parser;
use pest_derive::Parser;
use std::cell::OnceCell;
use std::fmt;

#[derive(Parser)]
#[grammar = "lexer/token.pest"]
struct TokenGrammar;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Decimal,
    Integer,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Name,
    EndOfInput,
}

impl TokenKind {
    fn from_rule(rule: Rule) -> Option<TokenKind> {
        match rule {
            Rule::decimal => Some(TokenKind::Decimal),
            Rule::integer => Some(TokenKind::Integer),
            Rule::plus => Some(TokenKind::Plus),
            Rule::minus => Some(TokenKind::Minus),
            Rule::star => Some(TokenKind::Star),
            Rule::slash => Some(TokenKind::Slash),
            Rule::caret => Some(TokenKind::Caret),
            Rule::lparen => Some(TokenKind::LParen),
            Rule::rparen => Some(TokenKind::RParen),
            Rule::name => Some(TokenKind::Name),
            _ => None,
        }
    }
}

/// A lexical unit together with the text it was scanned from.
///
/// The numeric value of `Decimal` and `Integer` tokens is parsed on first
/// access and cached.
#[derive(Debug, Clone)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
    value: OnceCell<f64>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
            value: OnceCell::new(),
        }
    }

    pub fn end_of_input(position: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", position)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the token in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value(&self) -> Result<f64> {
        if let Some(value) = self.value.get() {
            return Ok(*value);
        }
        let parsed = self.text.parse::<f64>()?;
        Ok(*self.value.get_or_init(|| parsed))
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text && self.position == other.position
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("end of input"),
            _ => f.write_str(&self.text),
        }
    }
}

/// Produces tokens one at a time from the unconsumed remainder of the input.
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            failed: false,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the first unconsumed character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Scans the next token, skipping leading whitespace.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let input = self.input;
        let rest = &input[self.cursor..];
        let mut pairs = TokenGrammar::parse(Rule::next_token, rest).map_err(|err| {
            trace!("No token rule matches at {}: {}", self.cursor, err);
            self.lexical_error(rest)
        })?;

        let Some(scan) = pairs.next() else {
            return Ok(None);
        };
        let consumed = scan.as_span().end();
        let matched = scan.into_inner().next();
        let start = self.cursor;
        self.cursor += consumed;

        let Some(pair) = matched else {
            return Ok(None);
        };
        let Some(kind) = TokenKind::from_rule(pair.as_rule()) else {
            return Ok(None);
        };

        let token = Token::new(kind, pair.as_str(), start + pair.as_span().start());
        trace!("Token {:?} {:?} at {}", token.kind, token.text, token.position);
        Ok(Some(token))
    }

    fn lexical_error(&self, rest: &str) -> EvalError {
        let offending = rest.trim_start();
        EvalError::Lexical {
            position: self.cursor + (rest.len() - offending.len()),
            text: offending.chars().next().map(String::from).unwrap_or_default(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Scans the whole input into a token sequence.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .iter()
            .map(Token::kind)
            .collect()
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("+-*/^()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_decimal_is_preferred_over_integer() {
        let tokens = tokenize("3.25 7").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Decimal, "3.25", 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Integer, "7", 5));
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_a_number() {
        let err = tokenize("3.").unwrap_err();
        assert_eq!(
            err,
            EvalError::Lexical {
                position: 1,
                text: ".".to_string()
            }
        );
    }

    #[test]
    fn test_names() {
        let tokens = tokenize("sqrt(pi)").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Name, "sqrt", 0));
        assert_eq!(tokens[2], Token::new(TokenKind::Name, "pi", 5));
        assert_eq!(kinds("sin2"), vec![TokenKind::Name, TokenKind::Integer]);
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let tokens = tokenize("  1 \t+\n 2  ").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].position(), 5);
        assert_eq!(tokens[2].position(), 8);
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_lexical_error_reports_offending_position() {
        let err = tokenize("2 $ 3").unwrap_err();
        assert_eq!(
            err,
            EvalError::Lexical {
                position: 2,
                text: "$".to_string()
            }
        );
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new("1 # 2");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(EvalError::Lexical { .. }))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lexer_is_lazy() {
        let mut lexer = Lexer::new("12 + ?");
        assert_eq!(lexer.next_token().unwrap().unwrap().text(), "12");
        assert_eq!(lexer.cursor(), 2);
        assert_eq!(lexer.next_token().unwrap().unwrap().kind(), TokenKind::Plus);
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_literal_values() {
        let tokens = tokenize("42 0.5").unwrap();
        assert_eq!(tokens[0].value().unwrap(), 42.0);
        assert_eq!(tokens[1].value().unwrap(), 0.5);
        assert_eq!(tokens[1].value().unwrap(), 0.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::Star, "*", 0).to_string(), "*");
        assert_eq!(Token::end_of_input(3).to_string(), "end of input");
    }
}
