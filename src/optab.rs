use std::collections::{HashMap, hash_map::Entry};

use bitflags::bitflags;

use crate::error::LexerError;

bitflags! {
    /// Instruction formats a mnemonic may be assembled in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Formats: u8 {
        const ONE = 1 << 0;
        const TWO = 1 << 1;
        const THREE = 1 << 2;
        const FOUR = 1 << 3;
    }
}

impl Formats {
    const MEMORY: Formats = Formats::THREE.union(Formats::FOUR);
    const REGISTER: Formats = Formats::TWO;
    const SINGLE: Formats = Formats::ONE;

    /// Format numbers in ascending order.
    pub fn numbers(self) -> impl Iterator<Item = u8> {
        (1..=4u8).filter(move |n| self.contains(Formats::from_bits_retain(1 << (n - 1))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpEntry {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub formats: Formats,
}

const fn op(mnemonic: &'static str, formats: Formats, opcode: u8) -> OpEntry {
    OpEntry { mnemonic, opcode, formats }
}

const SIC_XE: [OpEntry; 59] = [
    op("ADD", Formats::MEMORY, 0x18),
    op("ADDF", Formats::MEMORY, 0x58),
    op("ADDR", Formats::REGISTER, 0x90),
    op("AND", Formats::MEMORY, 0x40),
    op("CLEAR", Formats::REGISTER, 0xB4),
    op("COMP", Formats::MEMORY, 0x28),
    op("COMPF", Formats::MEMORY, 0x88),
    op("COMPR", Formats::REGISTER, 0xA0),
    op("DIV", Formats::MEMORY, 0x24),
    op("DIVF", Formats::MEMORY, 0x64),
    op("DIVR", Formats::REGISTER, 0x9C),
    op("FIX", Formats::SINGLE, 0xC4),
    op("FLOAT", Formats::SINGLE, 0xC0),
    op("HIO", Formats::SINGLE, 0xF4),
    op("J", Formats::MEMORY, 0x3C),
    op("JEQ", Formats::MEMORY, 0x30),
    op("JGT", Formats::MEMORY, 0x34),
    op("JLT", Formats::MEMORY, 0x38),
    op("JSUB", Formats::MEMORY, 0x48),
    op("LDA", Formats::MEMORY, 0x00),
    op("LDB", Formats::MEMORY, 0x68),
    op("LDCH", Formats::MEMORY, 0x50),
    op("LDF", Formats::MEMORY, 0x70),
    op("LDL", Formats::MEMORY, 0x08),
    op("LDS", Formats::MEMORY, 0x6C),
    op("LDT", Formats::MEMORY, 0x74),
    op("LDX", Formats::MEMORY, 0x04),
    op("LPS", Formats::MEMORY, 0xD0),
    op("MUL", Formats::MEMORY, 0x20),
    op("MULF", Formats::MEMORY, 0x60),
    op("MULR", Formats::REGISTER, 0x98),
    op("NORM", Formats::SINGLE, 0xC8),
    op("OR", Formats::MEMORY, 0x44),
    op("RD", Formats::MEMORY, 0xD8),
    op("RMO", Formats::REGISTER, 0xAC),
    op("RSUB", Formats::MEMORY, 0x4C),
    op("SHIFTL", Formats::REGISTER, 0xA4),
    op("SHIFTR", Formats::REGISTER, 0xA8),
    op("SIO", Formats::SINGLE, 0xF0),
    op("SSK", Formats::MEMORY, 0xEC),
    op("STA", Formats::MEMORY, 0x0C),
    op("STB", Formats::MEMORY, 0x78),
    op("STCH", Formats::MEMORY, 0x54),
    op("STF", Formats::MEMORY, 0x80),
    op("STI", Formats::MEMORY, 0xD4),
    op("STL", Formats::MEMORY, 0x14),
    op("STS", Formats::MEMORY, 0x7C),
    op("STSW", Formats::MEMORY, 0xE8),
    op("STT", Formats::MEMORY, 0x84),
    op("STX", Formats::MEMORY, 0x10),
    op("SUB", Formats::MEMORY, 0x1C),
    op("SUBF", Formats::MEMORY, 0x5C),
    op("SUBR", Formats::REGISTER, 0x94),
    op("SVC", Formats::REGISTER, 0xB0),
    op("TD", Formats::MEMORY, 0xE0),
    op("TIO", Formats::SINGLE, 0xF8),
    op("TIX", Formats::MEMORY, 0x2C),
    op("TIXR", Formats::REGISTER, 0xB8),
    op("WD", Formats::MEMORY, 0xDC),
];

/// Read-only mnemonic table consulted by the lexer.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationTable {
    inner: HashMap<&'static str, OpEntry>,
}

impl OperationTable {
    /// Builds the standard SIC/XE instruction set.
    pub fn build() -> Result<Self, LexerError> {
        Self::from_entries(SIC_XE)
    }

    /// Fails on the first mnemonic that appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = OpEntry>) -> Result<Self, LexerError> {
        let inner = entries
            .into_iter()
            .try_fold(HashMap::new(), |mut map, entry| {
                match map.entry(entry.mnemonic) {
                    Entry::Occupied(_) => {
                        return Err(LexerError::DuplicateMnemonic(entry.mnemonic.to_owned()));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                }
                Ok(map)
            })?;
        tracing::debug!(entries = inner.len(), "operation table built");
        Ok(Self { inner })
    }

    pub fn look_up(&self, mnemonic: &str) -> Option<&OpEntry> {
        self.inner.get(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entries sorted by mnemonic.
    pub fn iter(&self) -> impl Iterator<Item = &OpEntry> {
        let mut entries = self.inner.values().collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.mnemonic);
        entries.into_iter()
    }
}
