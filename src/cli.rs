//! CLI argument parsing and logger setup shared by both binaries.
use clap::Parser;

use crate::error::Result;

/// Arguments shared by both binaries. All real configuration comes from the
/// environment and fixed local paths; the CLI only controls logging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

/// Initialize the terminal logger used for all console reporting.
pub fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("lcg_release")
        .add_filter_allow_str("lcg_check")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}
