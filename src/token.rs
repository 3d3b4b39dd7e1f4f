use strum::{IntoStaticStr, VariantArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Symbol,
    Instruction,
    Directive,
    Comment,
    Number,
    // statement delimiter, never skipped
    NewLine,
    // index register separator
    Comma,
    // immediate addressing
    Hash,
    // format 4 prefix, EQU arithmetic
    Plus,
    // indirect addressing
    AtSign,
    // C'..' and X'..' delimiters
    SingleQuote,
    // current location counter
    Asterisk,
    // literal pool
    Equal,
    Minus,
    Division,
    LeftBracket,
    RightBracket,
    EndOfInput,
    Invalid,
}

impl TokenKind {
    /// Maps a single punctuation character to its kind.
    pub fn from_punctuation(c: char) -> Option<Self> {
        let kind = match c {
            ',' => TokenKind::Comma,
            '#' => TokenKind::Hash,
            '+' => TokenKind::Plus,
            '@' => TokenKind::AtSign,
            '\'' => TokenKind::SingleQuote,
            '*' => TokenKind::Asterisk,
            '=' => TokenKind::Equal,
            '-' => TokenKind::Minus,
            '\\' => TokenKind::Division,
            '(' => TokenKind::LeftBracket,
            ')' => TokenKind::RightBracket,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start_position: usize,
    pub end_position: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: &str, start_position: usize) -> Self {
        Self {
            kind,
            text: text.to_owned(),
            start_position,
            end_position: start_position + text.len(),
        }
    }

    pub fn end_of_input(position: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", position)
    }
}

pub type TokenTable = Vec<Token>;
