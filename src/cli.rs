use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

/// Plot the differential channels of an oscilloscope capture.
#[derive(Parser, Debug)]
#[command(
    name = "capture-plot",
    override_usage = "capture-plot [-h|--help] -i|--input <filename>",
    help_template = "{usage-heading} {usage}\n"
)]
pub struct Args {
    /// Capture file to plot. Repeats are accepted; the first one wins.
    #[arg(short, long, value_name = "filename", action = ArgAction::Append)]
    pub input: Vec<PathBuf>,

    /// Accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// The capture path, or the error shown when `-i` was not given.
    pub fn input_path(&self) -> Result<PathBuf, clap::Error> {
        match self.input.first() {
            Some(p) => Ok(p.clone()),
            None => Err(Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "-i|--input <filename> is REQUIRED",
            )),
        }
    }
}

/// Parse `argv` into the capture path.
///
/// Help, unknown flags and a missing `-i` all come back as a [`clap::Error`];
/// its `exit()` prints the message and usage with the right status code
/// (0 for help, 2 otherwise).
pub fn parse_from<I, T>(argv: I) -> Result<PathBuf, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv)?;
    if !args.rest.is_empty() {
        log::debug!("Ignoring positional arguments: {:?}", args.rest);
    }
    args.input_path()
}

/// Parse the process arguments, exiting on help or argument errors.
pub fn parse() -> PathBuf {
    parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}
