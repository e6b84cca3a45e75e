//! Instruction AST type

use crate::ast::Operand;
use serde::Serialize;
use std::slice;

/// What kind of instruction this is, as far as label discovery cares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InstrKind {
    /// Control flows to the following instruction only.
    Plain,

    /// Control may transfer to `target`.
    ///
    /// The branch's own address need not be the target of anything.
    Branch { target: u32 },
}

/// A single decoded instruction.
///
/// Instructions carry no links to their neighbors; ordering belongs to the
/// `Disassembly` that owns them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Instruction {
    /// Byte offset of the instruction in the bytecode stream.
    address: u32,

    /// The operation being executed
    opcode: String,

    /// Operands for the instruction, if any
    operands: Vec<Operand>,

    #[serde(flatten)]
    kind: InstrKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Instruction {
    pub fn new(address: u32, opcode: &str, operands: Vec<Operand>) -> Self {
        Instruction {
            address,
            opcode: opcode.to_string(),
            operands,
            kind: InstrKind::Plain,
            comment: None,
        }
    }

    /// Construct an instruction that may transfer control to `target`.
    pub fn branch(address: u32, opcode: &str, target: u32, operands: Vec<Operand>) -> Self {
        Instruction {
            address,
            opcode: opcode.to_string(),
            operands,
            kind: InstrKind::Branch { target },
            comment: None,
        }
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    pub fn iter_operands(&self) -> slice::Iter<'_, Operand> {
        self.operands.iter()
    }

    pub fn kind(&self) -> InstrKind {
        self.kind
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.kind, InstrKind::Branch { .. })
    }

    /// The branch target, if this is a branch instruction.
    pub fn target(&self) -> Option<u32> {
        match self.kind {
            InstrKind::Branch { target } => Some(target),
            InstrKind::Plain => None,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: &str) -> &mut Self {
        self.comment = Some(comment.to_string());
        self
    }
}
