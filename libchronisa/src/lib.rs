pub mod instruction;

/// Value stored in a register or embedded as an immediate operand.
pub type Value = i64;

/// Index into a register file.
pub type Register = usize;
