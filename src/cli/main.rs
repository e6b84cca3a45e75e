//! CLI support for non-command bits

use crate::cli::common::{load_config, Command};
use crate::{cli, project};
use clap::{App, AppSettings, Arg, ArgSettings};
use std::io;
use std::str::FromStr;

/// Construct the clap application with every global option and command.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    let mut app = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders decoded bytecode listings as disassembly")
        .setting(AppSettings::SubcommandRequiredElseHelp);
    app = app.arg(
        Arg::with_name("config")
            .long("config")
            .value_name(project::DEFAULT_FILENAME)
            .takes_value(true)
            .help("The configuration file to load")
            .set(ArgSettings::Global),
    );
    app = app.arg(
        Arg::with_name("label_prefix")
            .long("label-prefix")
            .value_name("loc")
            .takes_value(true)
            .help("Prefix for generated branch labels")
            .set(ArgSettings::Global),
    );
    app = app.arg(
        Arg::with_name("indent")
            .long("indent")
            .value_name("4")
            .takes_value(true)
            .help("Number of spaces to indent instructions by")
            .set(ArgSettings::Global),
    );

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    app
}

pub fn main() -> io::Result<()> {
    let matches = app().get_matches();

    let (command, submatches) = matches.subcommand();
    let submatches = submatches.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Please enter a command")
    })?;

    let config_filename = submatches
        .value_of("config")
        .unwrap_or(project::DEFAULT_FILENAME);
    let config = load_config(config_filename, submatches)?;

    match Command::from_str(command) {
        Ok(Command::Disassemble) => cli::dis(config, submatches)?,
        Ok(Command::Branches) => cli::branches(&config, submatches)?,
        Err(()) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown command {}", command),
            ))
        }
    };

    Ok(())
}
