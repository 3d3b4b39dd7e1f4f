use phf::phf_map;
use strum::{AsRefStr, VariantArray};

/// Assembler pseudo-instructions recognized by the lexer.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, AsRefStr, VariantArray)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Directive {
    Start,
    Word,
    Resw,
    Byte,
    Resb,
    End,
}

static DIRECTIVES: phf::Map<&'static str, Directive> = phf_map! {
    "START" => Directive::Start,
    "WORD" => Directive::Word,
    "RESW" => Directive::Resw,
    "BYTE" => Directive::Byte,
    "RESB" => Directive::Resb,
    "END" => Directive::End,
};

impl Directive {
    /// Case-sensitive: only the upper-case spelling is a directive.
    pub fn from_name(name: &str) -> Option<Self> {
        DIRECTIVES.get(name).copied()
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}
