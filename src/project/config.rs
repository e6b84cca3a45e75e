//! Project configuration file representation

use crate::asm::OutputFormat;
use serde::Deserialize;
use std::{fs, io};

/// Name of the configuration file read when none is given.
pub const DEFAULT_FILENAME: &str = "dsodis.json";

/// In-memory representation of the rendering configuration.
///
/// This is typically read from a file named `dsodis.json`. Every field is
/// optional; missing fields take their default values.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for generated branch target labels.
    #[serde(default = "default_label_prefix")]
    label_prefix: String,

    /// Whether instruction lines start with their address.
    #[serde(default = "default_show_addresses")]
    show_addresses: bool,

    /// Number of spaces before each instruction line.
    #[serde(default = "default_indent")]
    indent: usize,

    #[serde(default)]
    format: OutputFormat,
}

fn default_label_prefix() -> String {
    "loc".to_string()
}

fn default_show_addresses() -> bool {
    true
}

fn default_indent() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Config {
            label_prefix: default_label_prefix(),
            show_addresses: default_show_addresses(),
            indent: default_indent(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn read(filename: &str) -> io::Result<Self> {
        let config_file = fs::File::open(filename)?;
        let config: Self = serde_json::from_reader(config_file)?;

        Ok(config)
    }

    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    pub fn set_label_prefix(&mut self, prefix: &str) {
        self.label_prefix = prefix.to_string();
    }

    pub fn show_addresses(&self) -> bool {
        self.show_addresses
    }

    pub fn set_show_addresses(&mut self, show: bool) {
        self.show_addresses = show;
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }
}
