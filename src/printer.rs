//! Human-readable dumps of token streams and the operation table.

use std::fmt::Write;

use crate::{
    optab::OperationTable,
    token::{Token, TokenKind},
};

pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::from("TokenType\tToken\n----------------------\n");
    for token in tokens {
        let text = match token.kind {
            TokenKind::NewLine => "\\n",
            TokenKind::EndOfInput => "End of Input",
            _ => token.text.as_str(),
        };
        let name = token.kind.name();
        // two tabs keep short names aligned with long ones
        let gap = if name.len() < 8 { "\t\t" } else { "\t" };
        let _ = writeln!(out, "{name}{gap}{text}");
    }
    out
}

pub fn render_optab(optab: &OperationTable) -> String {
    let mut out = String::from("Mnemonic\tFormat\t\tOpcode\n---------------------------------------\n");
    for entry in optab.iter() {
        let formats = entry
            .formats
            .numbers()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}\t\t{formats}\t\t{:02X}", entry.mnemonic, entry.opcode);
    }
    out
}
