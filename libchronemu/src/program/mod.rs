use std::str::FromStr;

use libchronisa::{
    instruction::{DecodeError, Instruction},
    Register,
};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("Missing #ip directive on the first line")]
    MissingIpDirective,

    #[error("Malformed #ip directive {0:?}")]
    MalformedIpDirective(String),

    #[error("Line {line}: {source}")]
    Decode {
        line: usize,
        source: DecodeError,
    },
}

/// An instruction listing headed by a `#ip <register_index>` directive
/// naming the register that mirrors the program counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub ip_binding: Register,
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn parse(text: &str) -> Result<Self, ProgramError> {
        let mut lines = text.lines().enumerate();

        let (_, directive) = lines.next().ok_or(ProgramError::MissingIpDirective)?;
        let ip_binding = parse_ip_directive(directive)?;

        let instructions = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                line.parse()
                    .map_err(|source| ProgramError::Decode {
                        // 1-based, directive included.
                        line: index + 1,
                        source,
                    })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            ip_binding,
            instructions,
        })
    }
}

impl FromStr for Program {
    type Err = ProgramError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

fn parse_ip_directive(line: &str) -> Result<Register, ProgramError> {
    let malformed = || ProgramError::MalformedIpDirective(line.to_string());

    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["#ip", index] => index.parse().map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}
