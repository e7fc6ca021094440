use std::{env, io, process::ExitCode};

use clap::Parser;
use plistflip_cli::{logger::setup_logger, program_name, Args, EXIT_INVALID_OPTIONS};

fn main() -> anyhow::Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            // `--help` and `--version` also arrive here
            let code = if err.use_stderr() {
                EXIT_INVALID_OPTIONS
            } else {
                0
            };
            return Ok(ExitCode::from(code));
        }
    };
    setup_logger(args.log_level())?;
    let program = program_name(env::args_os().next());
    let code = args
        .dispatcher()
        .run(&program, &args.input, &mut io::stdout().lock());
    Ok(ExitCode::from(code))
}
