//! Project configuration

mod config;

#[cfg(test)]
mod tests;

pub use config::{Config, DEFAULT_FILENAME};
