//! Label AST type

use std::{fmt, str};

/// A label marking a branch target.
///
/// Labels are derived from the address they mark, so two labels with the
/// same prefix and address are the same label.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Label {
    /// Text placed before the address, e.g. `loc` in `loc_001C`.
    prefix: String,

    address: u32,
}

impl Label {
    pub fn new(prefix: &str, address: u32) -> Label {
        Label {
            prefix: prefix.to_string(),
            address,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn address(&self) -> u32 {
        self.address
    }
}

impl str::FromStr for Label {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split = s.rsplitn(2, '_');
        let maybe_address = split.next();
        let maybe_prefix = split.next();

        match (maybe_prefix, maybe_address) {
            (Some(prefix), Some(address)) if !prefix.is_empty() && !address.is_empty() => {
                let address = u32::from_str_radix(address, 16).map_err(|_| ())?;

                Ok(Label {
                    prefix: prefix.to_string(),
                    address,
                })
            }
            _ => Err(()),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{:04X}", self.prefix, self.address)
    }
}
