//! Writer trait

use crate::ast::Instruction;
use std::io::Result;

/// Trait for anything that renders a disassembly.
///
/// `Disassembly::visit` drives a writer over every stored instruction in
/// address order. The writer decides how things look; the disassembly only
/// decides where label boundaries fall.
pub trait Writer {
    /// Emit a label for a branch target.
    ///
    /// Called immediately before `write_instruction` for the instruction at
    /// `address`, and only if some branch targets that address.
    fn write_branch_label(&mut self, address: u32) -> Result<()>;

    /// Emit a single instruction.
    fn write_instruction(&mut self, instr: &Instruction) -> Result<()>;
}
