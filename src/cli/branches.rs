//! Branch listing command

use crate::ast::Label;
use crate::disasm::Disassembly;
use crate::listing;
use crate::project::Config;
use clap::ArgMatches;
use std::io;
use std::io::Write;

/// List each branch, in the order they appear, with its destination.
pub fn write_branches<W>(mut stream: W, dis: &Disassembly, config: &Config) -> io::Result<()>
where
    W: Write,
{
    for branch in dis.branches() {
        if let Some(target) = branch.target() {
            write!(stream, "{:08X}  {} -> ", branch.address(), branch.opcode())?;

            if dis.has_instruction(target) {
                writeln!(stream, "{}", Label::new(config.label_prefix(), target))?;
            } else {
                writeln!(stream, "${:08X}", target)?;
            }
        }
    }

    Ok(())
}

pub fn branches(config: &Config, matches: &ArgMatches) -> io::Result<()> {
    let listing_filename = matches.value_of("listing").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "You did not specify a listing to inspect.",
        )
    })?;
    let dis = listing::load(listing_filename)?;

    {
        let stdout = io::stdout();
        write_branches(stdout.lock(), &dis, config)?;
    }

    for target in dis.branch_targets() {
        if !dis.has_instruction(target) {
            eprintln!("WARN: Branch target ${:08X} is outside the listing", target);
        }
    }

    Ok(())
}
