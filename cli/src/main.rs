#![forbid(unsafe_code)]

mod cli_input;
mod errors;
mod fetch;
mod generate;
mod output;

use clap::Parser;
use cli_input::Args;
use errors::CliError;
use output::report;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let args = Args::parse();

    let exit_code = match try_main(args) {
        Ok(()) => 0,
        Err(error) => {
            report::error(&error);
            1
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<(), CliError> {
    let filter = {
        let builder = EnvFilter::builder();
        match args.log_filter.as_deref() {
            Some(argument_filter) => builder.parse_lossy(argument_filter),
            None => builder.from_env_lossy(),
        }
    };

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    generate::generate(&args)
}
