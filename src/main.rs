use clap::Parser;
use log::*;
use std::process::ExitCode;

use lcg_release::{Result, cli, command};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();

    cli::initialize_logger(args.debug)?;

    command::release::execute(&args).await
}
