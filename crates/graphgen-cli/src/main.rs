//! Command line entry point: parse flags, generate, then draw in a window or
//! save to a file.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use graphgen::{GenerateError, RenderError};
use log::error;

mod cli;
mod config;
mod window;

/// Exit status for rejected parameters, matching clap's usage errors.
const EXIT_INVALID_PARAMETER: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    let invalid_parameter = err.downcast_ref::<GenerateError>().is_some()
        || matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::InvalidParameter { .. })
        );
    if invalid_parameter {
        EXIT_INVALID_PARAMETER
    } else {
        1
    }
}
