pub mod artifacts;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;

pub use error::{LcgError, Result};
