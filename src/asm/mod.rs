//! Rendering of disassemblies into text

mod text;

#[cfg(test)]
mod tests;

pub use text::TextWriter;

use std::str;

/// Enumeration of all output formats the CLI can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Readable assembly text, rendered with a `TextWriter`.
    Text,

    /// The instruction records themselves, as JSON.
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "text" => Ok(OutputFormat::Text),
            "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl OutputFormat {
    pub fn friendly_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "JSON",
        }
    }
}

derive_deserialize_from_str!(OutputFormat, "valid output format");
