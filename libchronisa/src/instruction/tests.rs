use bimap::BiMap;

use super::{kind::Kind, DecodeError, Instruction};

#[test]
fn name_form_decode() {
    assert_eq!(
        "addr 0 1 2".parse::<Instruction>().unwrap(),
        Instruction::Addr(0, 1, 2)
    );
    assert_eq!(
        "seti -4 0 3".parse::<Instruction>().unwrap(),
        Instruction::Seti(-4, 3)
    );
    assert_eq!(
        "gtir 7 1 0".parse::<Instruction>().unwrap(),
        Instruction::Gtir(7, 1, 0)
    );
}

#[test]
fn numbered_form_matches_name_form() {
    let table = BiMap::from_iter([(0, Kind::Addr)]);

    let numbered = Instruction::decode_numbered("0 0 1 2", &table).unwrap();
    let named = "addr 0 1 2".parse::<Instruction>().unwrap();

    assert_eq!(numbered, named);
}

#[test]
fn unused_operand_is_ignored_but_validated() {
    // setr/seti carry only two operands; the second field may hold anything
    // integral.
    assert_eq!(
        "setr 1 99 2".parse::<Instruction>().unwrap(),
        Instruction::Setr(1, 2)
    );

    assert!(matches!(
        "setr 1 x 2".parse::<Instruction>(),
        Err(DecodeError::InvalidOperand(_))
    ));
}

#[test]
fn wrong_field_count_is_rejected() {
    assert_eq!(
        "addr 0 1".parse::<Instruction>(),
        Err(DecodeError::FieldCount(3))
    );
    assert_eq!(
        "addr 0 1 2 3".parse::<Instruction>(),
        Err(DecodeError::FieldCount(5))
    );
}

#[test]
fn unknown_opcode_name_is_rejected() {
    assert_eq!(
        "frobnicate 0 1 2".parse::<Instruction>(),
        Err(DecodeError::UnknownOpcodeName("frobnicate".to_string()))
    );
}

#[test]
fn unmapped_opcode_number_is_rejected() {
    let table = BiMap::from_iter([(0, Kind::Addr)]);

    assert_eq!(
        Instruction::decode_numbered("7 0 1 2", &table),
        Err(DecodeError::UnmappedOpcodeNumber(7))
    );
}

#[test]
fn non_integer_operand_is_rejected() {
    assert!(matches!(
        "addi 0 one 2".parse::<Instruction>(),
        Err(DecodeError::InvalidOperand(_))
    ));

    // Register slots must be non-negative; only immediate slots take signs.
    assert!(matches!(
        "addr -1 1 2".parse::<Instruction>(),
        Err(DecodeError::InvalidOperand(_))
    ));
}

#[test]
fn display_is_redecodable() {
    for line in ["addr 0 1 2", "addi 3 -7 1", "setr 1 0 2", "seti -4 0 3"] {
        let instruction = line.parse::<Instruction>().unwrap();
        assert_eq!(instruction.to_string(), line);
        assert_eq!(
            instruction.to_string().parse::<Instruction>().unwrap(),
            instruction
        );
    }
}

#[test]
fn all_kinds_have_unique_names() {
    for kind in Kind::ALL {
        assert_eq!(Kind::from_name(kind.name()), Some(kind));
    }
}
