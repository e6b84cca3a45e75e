//! In-memory instruction store for a bytecode disassembler, plus the text
//! writer, listing loader and CLI built around it.

#[macro_use]
extern crate serde_plain;

pub mod asm;
pub mod ast;
pub mod cli;
pub mod disasm;
pub mod input;
pub mod listing;
pub mod project;
