//! Loading of pre-decoded instruction listings.
//!
//! A listing is a JSON document holding instructions that some decoder has
//! already produced. Loading one replays every entry into a `Disassembly`,
//! exactly as a decoder would during its pass over the bytecode.

mod entry;
mod error;


pub use entry::{Entry, Listing};
pub use error::{Error, Result};

use crate::disasm::Disassembly;
use std::fs;
use std::io::{BufReader, Read};

/// Build a disassembly from a listing document.
pub fn read<R>(reader: R) -> Result<Disassembly>
where
    R: Read,
{
    let listing: Listing = serde_json::from_reader(reader)?;

    listing.into_disassembly()
}

/// Build a disassembly from a listing file.
pub fn load(filename: &str) -> Result<Disassembly> {
    let file = fs::File::open(filename)?;

    read(BufReader::new(file))
}
