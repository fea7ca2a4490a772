use crate::error::Result;
use crate::lexer::{Lexer, Token, TokenKind};

/// Cursor over the token stream with a single token of lookahead.
///
/// Tokens are scanned on demand; only the lookahead is held.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    lookahead: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let lookahead = Self::scan(&mut lexer)?;
        Ok(Self { lexer, lookahead })
    }

    fn scan(lexer: &mut Lexer<'a>) -> Result<Token> {
        Ok(lexer
            .next_token()?
            .unwrap_or_else(|| Token::end_of_input(lexer.cursor())))
    }

    /// The next, not yet consumed, token.
    pub fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Consumes the lookahead and scans its successor.
    pub fn advance(&mut self) -> Result<Token> {
        if self.lookahead.kind() == TokenKind::EndOfInput {
            return Ok(self.lookahead.clone());
        }
        let next = Self::scan(&mut self.lexer)?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Consumes the lookahead only if it is of `kind`.
    pub fn advance_if(&mut self, kind: TokenKind) -> Result<bool> {
        if self.lookahead.kind() != kind {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }
}
