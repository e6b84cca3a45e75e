//! An abstract syntax tree representation of decoded bytecode

mod instr;
mod label;
mod operand;

#[cfg(test)]
mod tests;

pub use instr::{InstrKind, Instruction};
pub use label::Label;
pub use operand::Operand;
