use crate::asm::{OutputFormat, TextWriter};
use crate::ast::{Instruction, Operand};
use crate::disasm::{Disassembly, Writer};
use crate::project::Config;
use std::str::FromStr;

fn render(dis: &Disassembly, config: &Config) -> String {
    let mut writer = TextWriter::new(Vec::new(), dis, config);

    dis.visit(&mut writer).unwrap();

    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn labels_precede_targets() {
    let mut dis = Disassembly::new();

    dis.add_instruction(Instruction::new(0, "pushframe", vec![]))
        .unwrap();
    dis.add_instruction(Instruction::branch(4, "jmpiffnot", 12, vec![]))
        .unwrap();
    dis.add_instruction(Instruction::new(8, "push", vec![Operand::int(1u8)]))
        .unwrap();
    dis.add_instruction(Instruction::new(12, "return", vec![]))
        .unwrap();

    assert_eq!(
        render(&dis, &Config::default()),
        "    00000000  pushframe\n\
         \x20   00000004  jmpiffnot loc_000C\n\
         \x20   00000008  push 1\n\
         loc_000C:\n\
         \x20   0000000C  return\n"
    );
}

#[test]
fn unresolved_targets_stay_raw() {
    let mut dis = Disassembly::new();

    dis.add_instruction(Instruction::branch(0, "jmp", 0x40, vec![]))
        .unwrap();
    dis.add_instruction(Instruction::new(2, "call", vec![Operand::cptr(0x80)]))
        .unwrap();

    let mut config = Config::default();
    config.set_show_addresses(false);
    config.set_indent(0);

    assert_eq!(render(&dis, &config), "jmp $00000040\ncall $00000080\n");
}

#[test]
fn code_references_need_a_declared_label() {
    let mut dis = Disassembly::new();

    dis.add_instruction(Instruction::new(0, "nop", vec![]))
        .unwrap();
    dis.add_instruction(Instruction::new(2, "call", vec![Operand::cptr(0)]))
        .unwrap();
    dis.add_instruction(Instruction::new(4, "nop", vec![]))
        .unwrap();
    dis.add_instruction(Instruction::branch(6, "jmp", 4, vec![]))
        .unwrap();
    dis.add_instruction(Instruction::new(8, "call", vec![Operand::cptr(4)]))
        .unwrap();

    let mut config = Config::default();
    config.set_show_addresses(false);
    config.set_indent(0);

    let out = render(&dis, &config);

    // Nothing branches to 0, so it gets no label and stays an address.
    assert!(!out.contains("loc_0000"));
    assert_eq!(
        out,
        "nop\ncall $00000000\nloc_0004:\nnop\njmp loc_0004\ncall loc_0004\n"
    );

    for line in out.lines() {
        if let Some(pos) = line.find("loc_") {
            let label = &line[pos..pos + 8];
            assert!(out.contains(&format!("{}:", label)), "{} is never declared", label);
        }
    }
}

#[test]
fn operands_and_comments() {
    let mut dis = Disassembly::new();

    dis.add_instruction(Instruction::new(
        0x10,
        "loadvar",
        vec![
            Operand::sym("%count"),
            Operand::sint(-3i8),
            Operand::float(1.5f32),
            Operand::str("say \"hi\""),
        ],
    ))
    .unwrap()
    .set_comment("locals");
    dis.add_instruction(Instruction::branch(0x14, "jmpif", 0x10, vec![Operand::int(7u16)]))
        .unwrap();

    let mut config = Config::default();
    config.set_label_prefix("L");
    config.set_indent(2);

    assert_eq!(
        render(&dis, &config),
        "L_0010:\n\
         \x20 00000010  loadvar %count, -3, 1.5, \"say \\\"hi\\\"\"  ; locals\n\
         \x20 00000014  jmpif 7, L_0010\n"
    );
}

#[test]
fn writes_single_lines() {
    let dis = Disassembly::new();
    let config = Config::default();
    let mut writer = TextWriter::new(Vec::new(), &dis, &config);

    writer.write_branch_label(0x1234).unwrap();
    writer
        .write_instruction(&Instruction::new(0x1234, "halt", vec![]))
        .unwrap();

    assert_eq!(
        String::from_utf8(writer.into_inner()).unwrap(),
        "loc_1234:\n    00001234  halt\n"
    );
}

#[test]
fn output_format_names() {
    assert_eq!(OutputFormat::from_str("text"), Ok(OutputFormat::Text));
    assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("html"), Err(()));
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
