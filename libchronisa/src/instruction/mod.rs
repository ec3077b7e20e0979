use std::{fmt::Display, str::FromStr};

use bimap::BiMap;
use kind::Kind;
use thiserror::Error;

use crate::{Register, Value};

pub mod kind;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("Invalid operand {0:?}")]
    InvalidOperand(String),

    #[error("Unknown opcode name {0:?}")]
    UnknownOpcodeName(String),

    #[error("Opcode number {0} missing from the name table")]
    UnmappedOpcodeNumber(usize),
}

/// One decoded instruction. Operand interpretation is fixed per opcode:
/// register references are `Register`, immediates are `Value`. The last
/// operand is always the destination register. `Setr`/`Seti` ignore the
/// second text field and carry only two operands.
///
/// There is deliberately no jump variant; control flow happens when a caller
/// mirrors its program counter into a register and lets ordinary arithmetic
/// overwrite it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Addr(Register, Register, Register),
    Addi(Register, Value, Register),
    Mulr(Register, Register, Register),
    Muli(Register, Value, Register),

    Banr(Register, Register, Register),
    Bani(Register, Value, Register),
    Borr(Register, Register, Register),
    Bori(Register, Value, Register),

    Setr(Register, Register),
    Seti(Value, Register),

    Gtir(Value, Register, Register),
    Gtri(Register, Value, Register),
    Gtrr(Register, Register, Register),

    Eqir(Value, Register, Register),
    Eqri(Register, Value, Register),
    Eqrr(Register, Register, Register),
}

impl Instruction {
    /// Decodes the numbered form `<opcode_number> <a> <b> <c>`, resolving the
    /// number through a caller-supplied table. The table comes from whatever
    /// classification process the caller ran; it is opaque here.
    pub fn decode_numbered(
        line: &str,
        table: &BiMap<usize, Kind>,
    ) -> Result<Self, DecodeError> {
        let [number, a, b, c] = split_fields(line)?;

        let number: usize = number
            .parse()
            .map_err(|_| DecodeError::InvalidOperand(number.to_string()))?;

        let kind = table
            .get_by_left(&number)
            .copied()
            .ok_or(DecodeError::UnmappedOpcodeNumber(number))?;

        Self::from_fields(kind, a, b, c)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Addr(..) => Kind::Addr,
            Self::Addi(..) => Kind::Addi,
            Self::Mulr(..) => Kind::Mulr,
            Self::Muli(..) => Kind::Muli,
            Self::Banr(..) => Kind::Banr,
            Self::Bani(..) => Kind::Bani,
            Self::Borr(..) => Kind::Borr,
            Self::Bori(..) => Kind::Bori,
            Self::Setr(..) => Kind::Setr,
            Self::Seti(..) => Kind::Seti,
            Self::Gtir(..) => Kind::Gtir,
            Self::Gtri(..) => Kind::Gtri,
            Self::Gtrr(..) => Kind::Gtrr,
            Self::Eqir(..) => Kind::Eqir,
            Self::Eqri(..) => Kind::Eqri,
            Self::Eqrr(..) => Kind::Eqrr,
        }
    }

    fn from_fields(kind: Kind, a: &str, b: &str, c: &str) -> Result<Self, DecodeError> {
        let c = register_operand(c)?;

        Ok(match kind {
            Kind::Addr => Self::Addr(register_operand(a)?, register_operand(b)?, c),
            Kind::Addi => Self::Addi(register_operand(a)?, value_operand(b)?, c),
            Kind::Mulr => Self::Mulr(register_operand(a)?, register_operand(b)?, c),
            Kind::Muli => Self::Muli(register_operand(a)?, value_operand(b)?, c),

            Kind::Banr => Self::Banr(register_operand(a)?, register_operand(b)?, c),
            Kind::Bani => Self::Bani(register_operand(a)?, value_operand(b)?, c),
            Kind::Borr => Self::Borr(register_operand(a)?, register_operand(b)?, c),
            Kind::Bori => Self::Bori(register_operand(a)?, value_operand(b)?, c),

            // The second field is unused but must still be an integer.
            Kind::Setr => {
                value_operand(b)?;
                Self::Setr(register_operand(a)?, c)
            }
            Kind::Seti => {
                value_operand(b)?;
                Self::Seti(value_operand(a)?, c)
            }

            Kind::Gtir => Self::Gtir(value_operand(a)?, register_operand(b)?, c),
            Kind::Gtri => Self::Gtri(register_operand(a)?, value_operand(b)?, c),
            Kind::Gtrr => Self::Gtrr(register_operand(a)?, register_operand(b)?, c),

            Kind::Eqir => Self::Eqir(value_operand(a)?, register_operand(b)?, c),
            Kind::Eqri => Self::Eqri(register_operand(a)?, value_operand(b)?, c),
            Kind::Eqrr => Self::Eqrr(register_operand(a)?, register_operand(b)?, c),
        })
    }
}

/// Decodes the self-describing form `<opcode_name> <a> <b> <c>`.
impl FromStr for Instruction {
    type Err = DecodeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let [name, a, b, c] = split_fields(line)?;

        let kind =
            Kind::from_name(name).ok_or_else(|| DecodeError::UnknownOpcodeName(name.to_string()))?;

        Self::from_fields(kind, a, b, c)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b, c) = match *self {
            Self::Addr(a, b, c)
            | Self::Mulr(a, b, c)
            | Self::Banr(a, b, c)
            | Self::Borr(a, b, c)
            | Self::Gtrr(a, b, c)
            | Self::Eqrr(a, b, c) => (a as Value, b as Value, c),

            Self::Addi(a, b, c)
            | Self::Muli(a, b, c)
            | Self::Bani(a, b, c)
            | Self::Bori(a, b, c)
            | Self::Gtri(a, b, c)
            | Self::Eqri(a, b, c) => (a as Value, b, c),

            Self::Gtir(a, b, c) | Self::Eqir(a, b, c) => (a, b as Value, c),

            // Unused operand slots print as zero to keep four fields.
            Self::Setr(a, c) => (a as Value, 0, c),
            Self::Seti(a, c) => (a, 0, c),
        };

        write!(f, "{} {} {} {}", self.kind(), a, b, c)
    }
}

fn split_fields(line: &str) -> Result<[&str; 4], DecodeError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    fields
        .try_into()
        .map_err(|fields: Vec<&str>| DecodeError::FieldCount(fields.len()))
}

fn value_operand(field: &str) -> Result<Value, DecodeError> {
    field
        .parse()
        .map_err(|_| DecodeError::InvalidOperand(field.to_string()))
}

fn register_operand(field: &str) -> Result<Register, DecodeError> {
    field
        .parse()
        .map_err(|_| DecodeError::InvalidOperand(field.to_string()))
}
