use simdutf8::basic::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexerError {
    #[error("invalid utf-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("mnemonic `{0}` defined more than once")]
    DuplicateMnemonic(String),
}
