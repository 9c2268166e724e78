use std::{io, process};

use clap::Parser;
use log::{info, LevelFilter};

use rastertool::{config::Args, exitcode, operations, Config, RastertoolError};

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn report(error: &RastertoolError) {
    eprintln!("{}: {error}", env!("CARGO_PKG_NAME"));
    if let RastertoolError::Batch(summary) = error {
        for (path, message) in summary.failures() {
            eprintln!("  {}: {message}", path.display());
        }
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = if error.use_stderr() {
                exitcode::USAGE
            } else {
                exitcode::OK
            };
            let _ = error.print();
            process::exit(code);
        }
    };

    setup_logging(args.debug);
    let config = Config::from(args);
    info!("{config:?}");

    let operations = config.operations();
    let mut stdout = io::stdout().lock();
    if let Err(error) = operations::run(&operations, &mut stdout) {
        report(&error);
        process::exit(error.exit_code());
    }
}
