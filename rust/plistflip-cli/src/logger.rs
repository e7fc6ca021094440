use std::io;

use anyhow::Context;
use log::LevelFilter;

/// Installs a logger that writes diagnostics at `level` and above to standard
/// error, leaving standard output to the status messages.
pub fn setup_logger(level: LevelFilter) -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("Unable to install logger")
}
