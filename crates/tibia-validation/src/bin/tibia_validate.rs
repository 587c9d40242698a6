//! Validate one identifier from the command line.
//!
//! This binary delegates to `tibia_validation::cli` for parsing and dispatch.
//! It prints the accepted or resolved value on stdout; on rejection it prints
//! the stable error code and message on stderr and exits non-zero.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tibia_validation::cli::{CliArgs, CliError, load_settings, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    match load_settings().and_then(|settings| run(&args, &settings)) {
        Ok(output) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &CliError) {
    if let Err(write_err) = writeln!(io::stderr().lock(), "error {}: {err}", err.code()) {
        drop(write_err);
    }
}
