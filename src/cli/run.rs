//! Main entry point for the i18n-js CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and exit status
//! - `Err` if the command fails (e.g., missing root path, parse errors)

use std::path::Path;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{export::export, init::init},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
