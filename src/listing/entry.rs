//! Listing file structures

use crate::ast::{Instruction, Operand};
use crate::disasm::Disassembly;
use crate::listing::Result;
use serde::Deserialize;

/// A single already-decoded instruction.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    address: u32,
    opcode: String,

    #[serde(default)]
    operands: Vec<Operand>,

    /// Where this instruction may transfer control to.
    ///
    /// Present only for branch instructions.
    #[serde(default)]
    target: Option<u32>,

    #[serde(default)]
    comment: Option<String>,
}

impl Entry {
    pub fn into_instruction(self) -> Instruction {
        let mut instr = match self.target {
            Some(target) => Instruction::branch(self.address, &self.opcode, target, self.operands),
            None => Instruction::new(self.address, &self.opcode, self.operands),
        };

        if let Some(comment) = self.comment {
            instr.set_comment(&comment);
        }

        instr
    }
}

/// In-memory representation of a listing file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    instructions: Vec<Entry>,
}

impl Listing {
    pub fn iter_entries(&self) -> impl Iterator<Item = &Entry> {
        self.instructions.iter()
    }

    /// Replay every entry, in file order, into a new disassembly.
    pub fn into_disassembly(self) -> Result<Disassembly> {
        let mut dis = Disassembly::new();

        for entry in self.instructions {
            dis.add_instruction(entry.into_instruction())?;
        }

        Ok(dis)
    }
}
