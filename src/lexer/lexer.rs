use std::{
    iter::{FusedIterator, Peekable},
    str::CharIndices,
};

use crate::{
    directive::Directive,
    optab::OperationTable,
    token::{Token, TokenKind, TokenTable},
};

#[derive(Debug)]
pub struct Lexer<'a> {
    inner: Peekable<CharIndices<'a>>,
    text: &'a str,
    position: usize,
    optab: &'a OperationTable,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, optab: &'a OperationTable) -> Self {
        Self {
            inner: text.char_indices().peekable(),
            text,
            position: 0,
            optab,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some((index, c)) = self.inner.next_if(|(_, c)| predicate(*c)) {
            self.position = index + c.len_utf8();
        }
    }

    // only the plain space is whitespace, tabs fall through to Invalid
    #[inline]
    fn skip_whitespace(&mut self) {
        self.eat_while(|c| c == ' ');
    }

    #[inline]
    fn match_number(&mut self) -> Token {
        let start_position = self.position;
        self.eat_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Number, &self.text[start_position..self.position], start_position)
    }

    #[inline]
    fn match_identify(&mut self) -> Token {
        let start_position = self.position;
        self.eat_while(char::is_alphanumeric);
        let text = &self.text[start_position..self.position];

        let kind = if self.optab.look_up(text).is_some() {
            TokenKind::Instruction
        } else if Directive::from_name(text).is_some() {
            TokenKind::Directive
        } else {
            TokenKind::Symbol
        };
        Token::new(kind, text, start_position)
    }

    #[inline]
    fn match_comment(&mut self) -> Token {
        let start_position = self.position;
        self.eat_while(|c| c != '\n');
        Token::new(TokenKind::Comment, &self.text[start_position..self.position], start_position)
    }

    #[inline]
    fn match_single(&mut self, kind: TokenKind) -> Token {
        let start_position = self.position;
        if let Some((index, c)) = self.inner.next() {
            self.position = index + c.len_utf8();
        }
        Token::new(kind, &self.text[start_position..self.position], start_position)
    }

    /// Scans one token. Once the buffer is exhausted every call returns
    /// `EndOfInput` without moving the cursor.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(&(_, c)) = self.inner.peek() else {
            return Token::end_of_input(self.position);
        };
        let token = match c {
            c if c.is_alphabetic() => self.match_identify(),
            '.' => self.match_comment(),
            '0'..='9' => self.match_number(),
            '\n' => self.match_single(TokenKind::NewLine),
            c => self.match_single(TokenKind::from_punctuation(c).unwrap_or(TokenKind::Invalid)),
        };

        tracing::trace!(kind = token.kind.name(), text = %token.text, start = token.start_position, "token");
        token
    }

    /// Drains the remaining input. The `EndOfInput` sentinel is not stored.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.text.len()))]
    pub fn tokenize(&mut self) -> TokenTable {
        let table = self.by_ref().collect::<TokenTable>();
        tracing::debug!(tokens = table.len(), "tokenized");
        table
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
