//! CLI commands

mod branches;
mod common;
mod dis;
mod main;


pub use branches::branches;
pub use common::{load_config, Command};
pub use dis::dis;
pub use main::{app, main};
