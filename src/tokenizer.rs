use simdutf8::basic::from_utf8;

use crate::{error::LexerError, lexer::Lexer, optab::OperationTable, token::TokenTable};

/// Owns the operation table and hands it to a fresh [`Lexer`] per buffer.
#[derive(Debug)]
pub struct Tokenizer {
    optab: OperationTable,
}

impl Tokenizer {
    pub fn new() -> Result<Self, LexerError> {
        Ok(Self::with_table(OperationTable::build()?))
    }

    pub fn with_table(optab: OperationTable) -> Self {
        Self { optab }
    }

    pub fn optab(&self) -> &OperationTable {
        &self.optab
    }

    pub fn lexer<'a>(&'a self, text: &'a str) -> Lexer<'a> {
        Lexer::new(text, &self.optab)
    }

    pub fn tokenize(&self, text: &str) -> TokenTable {
        self.lexer(text).tokenize()
    }

    pub fn tokenize_bytes(&self, bytes: &[u8]) -> Result<TokenTable, LexerError> {
        let text = from_utf8(bytes)?;
        Ok(self.tokenize(text))
    }
}
