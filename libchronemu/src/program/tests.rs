use libchronisa::instruction::{DecodeError, Instruction};

use super::{Program, ProgramError};

#[test]
fn parses_header_and_instructions() {
    let program = Program::parse("#ip 3\nseti 5 0 1\naddr 1 2 0\n").unwrap();

    assert_eq!(program.ip_binding, 3);
    assert_eq!(
        program.instructions,
        vec![Instruction::Seti(5, 1), Instruction::Addr(1, 2, 0)]
    );
}

#[test]
fn skips_blank_lines() {
    let program = Program::parse("#ip 0\n\nseti 1 0 0\n\n").unwrap();

    assert_eq!(program.instructions.len(), 1);
}

#[test]
fn rejects_empty_text() {
    assert_eq!(Program::parse(""), Err(ProgramError::MissingIpDirective));
}

#[test]
fn rejects_malformed_directive() {
    for text in ["#ip", "#ip x", "#pc 0", "seti 5 0 1"] {
        assert_eq!(
            Program::parse(text),
            Err(ProgramError::MalformedIpDirective(text.to_string()))
        );
    }
}

#[test]
fn decode_errors_carry_the_line_number() {
    assert_eq!(
        Program::parse("#ip 0\nseti 5 0 1\nfrobnicate 0 1 2"),
        Err(ProgramError::Decode {
            line: 3,
            source: DecodeError::UnknownOpcodeName("frobnicate".to_string()),
        })
    );
}
