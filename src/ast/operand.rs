//! Operand AST type

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// A name defined by the bytecode format, such as a variable or function
    /// name pulled from the identifier table.
    Symbol(String),

    /// An unsigned integer constant.
    Integer(u32),

    /// A signed integer constant.
    SignedInteger(i32),

    /// A floating-point constant.
    Float(f64),

    /// A string constant.
    String(String),

    /// An address within the bytecode stream.
    ///
    /// Writers may render this as a label if the address is a known
    /// instruction.
    CodeReference(u32),
}

impl Operand {
    pub fn sym(sym: &str) -> Self {
        Operand::Symbol(sym.to_string())
    }

    pub fn int<MI>(int: MI) -> Self
    where
        u32: From<MI>,
    {
        Operand::Integer(u32::from(int))
    }

    pub fn sint<MI>(int: MI) -> Self
    where
        i32: From<MI>,
    {
        Operand::SignedInteger(i32::from(int))
    }

    pub fn float<MF>(flot: MF) -> Self
    where
        f64: From<MF>,
    {
        Operand::Float(f64::from(flot))
    }

    pub fn str(s: &str) -> Self {
        Operand::String(s.to_string())
    }

    pub fn cptr(ptr: u32) -> Self {
        Operand::CodeReference(ptr)
    }
}
