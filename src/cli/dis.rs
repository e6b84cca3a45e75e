//! Disassembly rendering command

use crate::asm::{OutputFormat, TextWriter};
use crate::cli::common::apply_format;
use crate::disasm::Disassembly;
use crate::project::Config;
use crate::{input, listing};
use clap::ArgMatches;
use std::io;
use std::io::Write;

/// Parse an address argument, reporting which argument was wrong.
fn parse_address_arg(text: &str, name: &str, config: &Config) -> io::Result<u32> {
    input::parse_address(text, config.label_prefix()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a valid address for --{}", text, name),
        )
    })
}

/// Render all of a disassembly, or the instructions within `range`.
///
/// Slices keep the labels of any branch targets they contain.
pub fn write_disassembly<W>(
    mut stream: W,
    dis: &Disassembly,
    config: &Config,
    range: Option<(u32, u32)>,
) -> io::Result<()>
where
    W: Write,
{
    match (config.format(), range) {
        (OutputFormat::Text, None) => {
            let mut writer = TextWriter::new(stream, dis, config);

            dis.visit(&mut writer)?;
        }
        (OutputFormat::Text, Some((from, to))) => {
            let mut writer = TextWriter::new(stream, dis, config);

            dis.visit_range(from, to, &mut writer)?;
        }
        (OutputFormat::Json, None) => {
            serde_json::to_writer_pretty(&mut stream, &dis.get_instructions())?;
            writeln!(stream)?;
        }
        (OutputFormat::Json, Some((from, to))) => {
            serde_json::to_writer_pretty(&mut stream, &dis.slice_instructions(from, to)?)?;
            writeln!(stream)?;
        }
    }

    Ok(())
}

pub fn dis(mut config: Config, matches: &ArgMatches) -> io::Result<()> {
    apply_format(&mut config, matches.value_of("format"));

    if matches.is_present("no_addresses") {
        config.set_show_addresses(false);
    }

    let listing_filename = matches.value_of("listing").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "You did not specify a listing to disassemble.",
        )
    })?;
    let dis = listing::load(listing_filename)?;

    let range = match matches.value_of("from") {
        Some(from) => {
            let from = parse_address_arg(from, "from", &config)?;
            let to = match matches.value_of("to") {
                Some(to) => parse_address_arg(to, "to", &config)?,
                None => u32::MAX,
            };

            Some((from, to))
        }
        None => None,
    };

    if dis.is_empty() {
        eprintln!("WARN: Listing {} contains no instructions", listing_filename);
    }

    let stdout = io::stdout();
    let handle = stdout.lock();

    write_disassembly(handle, &dis, &config, range)
}
