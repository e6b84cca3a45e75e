//! The instruction store - holds a decoded instruction stream and answers the
//! queries needed to render it.

mod disassembly;
mod error;
mod traits;


pub use disassembly::{Disassembly, Iter};
pub use error::{Error, Result};
pub use traits::Writer;
