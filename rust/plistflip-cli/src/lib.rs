use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use plistflip::{Dispatcher, FileCommand, Plutil};

pub mod logger;

/// The name reported in the usage message when the invocation name is unknown.
pub const DEFAULT_PROGRAM_NAME: &str = "plistflip";
/// Exit code for options that can't be parsed, kept apart from the codes the
/// dispatcher reports (`EX_USAGE` from sysexits).
pub const EXIT_INVALID_OPTIONS: u8 = 64;

#[derive(Debug, Parser)]
#[clap(version, about)]
#[cfg_attr(test, derive(Default))]
pub struct Args {
    #[clap(
        help = "A binary or XML property list to convert in place to the other encoding. Exactly one file is expected; otherwise usage is printed",
        value_name = "PLIST_FILE"
    )]
    pub input: Vec<PathBuf>,
    #[clap(
        short = 'n',
        long = "dry-run",
        action = ArgAction::SetTrue,
        default_value = "false",
        help = "Detect and report the encoding without converting the file"
    )]
    pub dry_run: bool,
    #[clap(
        long = "file-cmd",
        env = "PLISTFLIP_FILE_CMD",
        default_value = FileCommand::DEFAULT_PROGRAM,
        value_name = "PROGRAM",
        help = "The program used to detect the file type. It's invoked as `PROGRAM -b PLIST_FILE`"
    )]
    pub file_cmd: PathBuf,
    #[clap(
        long = "plutil-cmd",
        env = "PLISTFLIP_PLUTIL_CMD",
        default_value = Plutil::DEFAULT_PROGRAM,
        value_name = "PROGRAM",
        help = "The program used to convert the file. It's invoked as `PROGRAM -convert xml1|binary1 PLIST_FILE`"
    )]
    pub plutil_cmd: PathBuf,
    #[clap(
        short,
        long,
        action = ArgAction::Count,
        help = "Log more diagnostics to standard error. Can be repeated"
    )]
    pub verbose: u8,
}

impl Args {
    /// Maps the number of `-v` flags to a log level.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Builds a dispatcher backed by the configured external programs.
    pub fn dispatcher(&self) -> Dispatcher<FileCommand, Plutil> {
        Dispatcher::new(
            FileCommand::new(&self.file_cmd),
            Plutil::new(&self.plutil_cmd),
        )
        .dry_run(self.dry_run)
    }
}

/// Returns the name to show in the usage message: the program's first argument as
/// invoked, falling back to [`DEFAULT_PROGRAM_NAME`].
pub fn program_name(argv0: Option<OsString>) -> String {
    argv0
        .filter(|arg| !arg.is_empty())
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_owned())
}
