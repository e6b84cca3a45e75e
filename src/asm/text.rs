//! Plain text disassembly syntax

use crate::ast::{Instruction, Label, Operand};
use crate::disasm::{Disassembly, Writer};
use crate::project::Config;
use std::io::{Result, Write};

/// Writer that renders instructions as assembly-style text lines.
///
/// Branch targets and code references resolve to labels when the address
/// they point to is a stored, labeled instruction. Anything else (such as a
/// target in a block that hasn't been decoded) is printed as a raw address.
pub struct TextWriter<'a, W>
where
    W: Write,
{
    stream: W,
    disassembly: &'a Disassembly,
    config: &'a Config,
}

impl<'a, W> TextWriter<'a, W>
where
    W: Write,
{
    pub fn new(stream: W, disassembly: &'a Disassembly, config: &'a Config) -> Self {
        TextWriter {
            stream,
            disassembly,
            config,
        }
    }

    pub fn into_inner(self) -> W {
        self.stream
    }

    /// Emit a reference to an address, as a label if one will exist.
    ///
    /// Labels are only declared for stored instructions that some branch
    /// targets.
    fn emit_address(&mut self, address: u32) -> Result<()> {
        if self.disassembly.has_instruction(address)
            && self.disassembly.is_branch_target(address)
        {
            write!(
                self.stream,
                "{}",
                Label::new(self.config.label_prefix(), address)
            )
        } else {
            write!(self.stream, "${:08X}", address)
        }
    }

    fn emit_operand(&mut self, operand: &Operand) -> Result<()> {
        match operand {
            Operand::Symbol(sym) => write!(self.stream, "{}", sym),
            Operand::Integer(int) => write!(self.stream, "{}", int),
            Operand::SignedInteger(int) => write!(self.stream, "{}", int),
            Operand::Float(flot) => write!(self.stream, "{}", flot),
            Operand::String(s) => write!(self.stream, "\"{}\"", s.escape_default()),
            Operand::CodeReference(address) => self.emit_address(*address),
        }
    }

    /// Emit the indentation and address column for an instruction.
    fn emit_instr_start(&mut self, instr: &Instruction) -> Result<()> {
        write!(self.stream, "{}", " ".repeat(self.config.indent()))?;

        if self.config.show_addresses() {
            write!(self.stream, "{:08X}  ", instr.address())?;
        }

        Ok(())
    }
}

impl<'a, W> Writer for TextWriter<'a, W>
where
    W: Write,
{
    fn write_branch_label(&mut self, address: u32) -> Result<()> {
        writeln!(
            self.stream,
            "{}:",
            Label::new(self.config.label_prefix(), address)
        )
    }

    fn write_instruction(&mut self, instr: &Instruction) -> Result<()> {
        self.emit_instr_start(instr)?;
        write!(self.stream, "{}", instr.opcode())?;

        let mut first = true;

        for operand in instr.iter_operands() {
            write!(self.stream, "{}", if first { " " } else { ", " })?;
            self.emit_operand(operand)?;
            first = false;
        }

        if let Some(target) = instr.target() {
            write!(self.stream, "{}", if first { " " } else { ", " })?;
            self.emit_address(target)?;
        }

        if let Some(comment) = instr.comment() {
            write!(self.stream, "  ; {}", comment)?;
        }

        writeln!(self.stream)
    }
}
