//! Error type for listing loads

use crate::disasm;
use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Underlying cause of error is JSON related
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The listing's instructions could not be stored, e.g. because they are
    /// out of order
    #[error("Invalid listing: {0}")]
    Disassembly(#[from] disasm::Error),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::IoError(e) => e,
            Error::JsonError(e) => e.into(),
            Error::Disassembly(e) => e.into(),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
