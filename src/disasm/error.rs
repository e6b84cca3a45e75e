//! Error type for the instruction store

use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An instruction with this address is already stored.
    #[error("instruction at ${0:08X} was already added")]
    DuplicateAddress(u32),

    /// The instruction's address is lower than the last stored address.
    ///
    /// Instructions must be added in ascending address order; the container
    /// never sorts.
    #[error("instruction at ${address:08X} was added after ${last:08X}")]
    AddressOutOfOrder { address: u32, last: u32 },

    /// A slice was requested starting at an address with no instruction.
    #[error("no instruction at ${0:08X} to start a slice from")]
    RangeStartNotFound(u32),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        let kind = match err {
            Error::RangeStartNotFound(_) => io::ErrorKind::NotFound,
            _ => io::ErrorKind::InvalidData,
        };

        io::Error::new(kind, err)
    }
}

pub type Result<T> = result::Result<T, Error>;
