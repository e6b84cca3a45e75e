use crate::ast::{InstrKind, Instruction, Label, Operand};
use std::str::FromStr;

#[test]
fn label_display() {
    assert_eq!(Label::new("loc", 0xC).to_string(), "loc_000C");
    assert_eq!(Label::new("loc", 0x12345).to_string(), "loc_12345");
}

#[test]
fn label_parse() {
    let label = Label::from_str("loc_001C").unwrap();

    assert_eq!(label.prefix(), "loc");
    assert_eq!(label.address(), 0x1C);

    let nested = Label::from_str("block_end_00F0").unwrap();

    assert_eq!(nested.prefix(), "block_end");
    assert_eq!(nested.address(), 0xF0);
}

#[test]
fn label_parse_invalid() {
    assert!(Label::from_str("loc").is_err());
    assert!(Label::from_str("_001C").is_err());
    assert!(Label::from_str("loc_").is_err());
    assert!(Label::from_str("loc_XYZ").is_err());
}

#[test]
fn branch_kind() {
    let plain = Instruction::new(0, "pushframe", vec![Operand::int(2u8)]);
    let branch = Instruction::branch(4, "jmpiffnot", 12, vec![]);

    assert!(!plain.is_branch());
    assert_eq!(plain.target(), None);
    assert_eq!(plain.kind(), InstrKind::Plain);

    assert!(branch.is_branch());
    assert_eq!(branch.target(), Some(12));
    assert_eq!(branch.kind(), InstrKind::Branch { target: 12 });
}

#[test]
fn instruction_serialization() {
    let mut branch = Instruction::branch(4, "jmp", 12, vec![]);
    branch.set_comment("loop");

    let json = serde_json::to_value(&branch).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "address": 4,
            "opcode": "jmp",
            "operands": [],
            "kind": "branch",
            "target": 12,
            "comment": "loop"
        })
    );

    let plain = Instruction::new(0, "push", vec![Operand::sym("x")]);
    let json = serde_json::to_value(&plain).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "address": 0,
            "opcode": "push",
            "operands": [{"symbol": "x"}],
            "kind": "plain"
        })
    );
}
