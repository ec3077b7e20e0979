use anyhow::anyhow;
use libchronisa::{instruction::Instruction, Register};
use regfile::RegFile;

pub mod execute;
pub mod program;
pub mod regfile;

/// A program plus the state needed to drive it: a register file and the
/// index of the register that mirrors the program counter.
///
/// The instruction set has no jump opcode. The machine writes the counter
/// into the bound register before each fetch and reads it back afterward,
/// so any instruction that writes that register redirects execution.
pub struct Machine {
    pub program: Vec<Instruction>,
    pub reg_file: RegFile,
    pub ip_binding: Register,
}

impl Machine {
    pub fn new(
        program: Vec<Instruction>,
        ip_binding: Register,
        register_count: usize,
    ) -> anyhow::Result<Self> {
        if ip_binding >= register_count {
            return Err(anyhow!(
                "Instruction pointer binding {} outside a file of {} registers",
                ip_binding,
                register_count
            ));
        }

        Ok(Self {
            program,
            reg_file: RegFile::new(register_count),
            ip_binding,
        })
    }

    pub fn from_program(
        program: program::Program,
        register_count: usize,
    ) -> anyhow::Result<Self> {
        Self::new(program.instructions, program.ip_binding, register_count)
    }
}
