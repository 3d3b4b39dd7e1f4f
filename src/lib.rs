mod directive;
mod error;
mod lexer;
mod optab;
mod printer;
mod token;
pub mod tokenizer;

pub use {
    directive::Directive,
    error::LexerError,
    lexer::Lexer,
    optab::{Formats, OpEntry, OperationTable},
    printer::{render_optab, render_tokens},
    token::{Token, TokenKind, TokenTable},
    tokenizer::Tokenizer,
};
