use libchronisa::{instruction::Instruction, Value};
use log::{debug, trace};
use thiserror::Error;

use crate::{
    regfile::{OutOfRangeError, RegFile},
    Machine,
};


pub enum StepOk {
    Normal,
    Halted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepErr {
    #[error("Register access violation: {0}")]
    RegisterAccessViolation(#[from] OutOfRangeError),
}

/// Applies one instruction to the register file. Exactly one register (the
/// destination) is written; comparison opcodes write only 0 or 1.
///
/// Arithmetic is plain `i64` arithmetic. Overflow is outside the contract:
/// program values are assumed to fit the native signed range.
pub fn execute(instruction: &Instruction, regs: &mut RegFile) -> Result<(), OutOfRangeError> {
    let (dest, value) = match *instruction {
        Instruction::Addr(a, b, c) => (c, regs.register(a)? + regs.register(b)?),
        Instruction::Addi(a, b, c) => (c, regs.register(a)? + b),
        Instruction::Mulr(a, b, c) => (c, regs.register(a)? * regs.register(b)?),
        Instruction::Muli(a, b, c) => (c, regs.register(a)? * b),

        Instruction::Banr(a, b, c) => (c, regs.register(a)? & regs.register(b)?),
        Instruction::Bani(a, b, c) => (c, regs.register(a)? & b),
        Instruction::Borr(a, b, c) => (c, regs.register(a)? | regs.register(b)?),
        Instruction::Bori(a, b, c) => (c, regs.register(a)? | b),

        Instruction::Setr(a, c) => (c, regs.register(a)?),
        Instruction::Seti(a, c) => (c, a),

        Instruction::Gtir(a, b, c) => (c, (a > regs.register(b)?) as Value),
        Instruction::Gtri(a, b, c) => (c, (regs.register(a)? > b) as Value),
        Instruction::Gtrr(a, b, c) => (c, (regs.register(a)? > regs.register(b)?) as Value),

        Instruction::Eqir(a, b, c) => (c, (a == regs.register(b)?) as Value),
        Instruction::Eqri(a, b, c) => (c, (regs.register(a)? == b) as Value),
        Instruction::Eqrr(a, b, c) => (c, (regs.register(a)? == regs.register(b)?) as Value),
    };

    *regs.register_mut(dest)? = value;
    Ok(())
}

impl Machine {
    /// Fetches the counter from the bound register, executes the instruction
    /// it points at, and writes the incremented counter back. A counter
    /// outside `[0, program.len())` means the machine has halted.
    pub fn step(&mut self) -> Result<StepOk, StepErr> {
        let ip = self.reg_file.register(self.ip_binding)?;

        let instruction = match usize::try_from(ip)
            .ok()
            .and_then(|ip| self.program.get(ip))
        {
            Some(instruction) => instruction,
            None => return Ok(StepOk::Halted),
        };

        trace!("ip={} {} {:?}", ip, instruction, self.reg_file.as_slice());

        execute(instruction, &mut self.reg_file)?;
        *self.reg_file.register_mut(self.ip_binding)? += 1;

        Ok(StepOk::Normal)
    }

    /// Steps until the counter leaves the program. Returns the number of
    /// instructions executed. Does not terminate on a non-halting program;
    /// see [`Self::run_bounded`].
    pub fn run_to_halt(&mut self) -> Result<u64, StepErr> {
        let mut steps = 0;

        loop {
            match self.step()? {
                StepOk::Normal => steps += 1,
                StepOk::Halted => {
                    debug!("Halted after {} steps", steps);
                    return Ok(steps);
                }
            }
        }
    }

    /// Steps until halt or until `limit` instructions have executed.
    /// Returns the step count on halt, or `None` if the limit was hit first.
    pub fn run_bounded(&mut self, limit: u64) -> Result<Option<u64>, StepErr> {
        for steps in 0..limit {
            if let StepOk::Halted = self.step()? {
                debug!("Halted after {} steps", steps);
                return Ok(Some(steps));
            }
        }

        debug!("Step limit of {} reached before halt", limit);
        Ok(None)
    }
}
