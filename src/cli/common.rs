//! Common utilities for command implementations

use crate::asm::OutputFormat;
use crate::project::Config;
use clap::{App, Arg, ArgMatches, SubCommand};
use std::io;
use std::str::FromStr;

/// Enumeration of all CLI commands
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Disassemble,
    Branches,
}

impl Command {
    /// Enumerate all commands that dsodis recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Disassemble, Branches]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Disassemble => SubCommand::with_name("dis")
                .about("Render a listing as disassembly text")
                .arg(
                    Arg::with_name("listing")
                        .value_name("listing.json")
                        .index(1)
                        .required(true)
                        .help("The decoded instruction listing to render"),
                )
                .arg(
                    Arg::with_name("from")
                        .long("from")
                        .value_name("ADDR")
                        .takes_value(true)
                        .help("Only render instructions starting at this address or label"),
                )
                .arg(
                    Arg::with_name("to")
                        .long("to")
                        .value_name("ADDR")
                        .takes_value(true)
                        .requires("from")
                        .help("Stop rendering after this address or label"),
                )
                .arg(
                    Arg::with_name("format")
                        .long("format")
                        .value_name("text|json")
                        .takes_value(true)
                        .help("What output format to produce"),
                )
                .arg(
                    Arg::with_name("no_addresses")
                        .long("no-addresses")
                        .help("Omit the address column"),
                ),
            Command::Branches => SubCommand::with_name("branches")
                .about("List every branch in a listing and where it goes")
                .arg(
                    Arg::with_name("listing")
                        .value_name("listing.json")
                        .index(1)
                        .required(true)
                        .help("The decoded instruction listing to inspect"),
                ),
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "dis" => Ok(Command::Disassemble),
            "branches" => Ok(Command::Branches),
            _ => Err(()),
        }
    }
}

/// Load the configuration file, falling back to defaults if there isn't one.
///
/// Global option overrides from the command line are applied on top.
pub fn load_config(filename: &str, matches: &ArgMatches) -> io::Result<Config> {
    let mut config = match Config::read(filename) {
        Ok(config) => config,
        Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
            if matches.occurrences_of("config") > 0 {
                eprintln!("WARN: Config file {} does not exist, using defaults", filename);
            }

            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(prefix) = matches.value_of("label_prefix") {
        config.set_label_prefix(prefix);
    }

    if let Some(indent) = matches.value_of("indent") {
        let indent = usize::from_str(indent).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Indentation must be a number of spaces",
            )
        })?;

        config.set_indent(indent);
    }

    Ok(config)
}

/// Apply a `--format` override to the configuration.
pub fn apply_format(config: &mut Config, format: Option<&str>) {
    if let Some(format) = format {
        match OutputFormat::from_str(format) {
            Ok(format) => config.set_format(format),
            Err(()) => eprintln!(
                "WARN: Unknown output format {}, using {} output",
                format,
                config.format().friendly_name()
            ),
        }
    }
}
