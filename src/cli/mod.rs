use std::env;

use anyhow::{Context, Result};

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, GenerateArgs};
pub use exit_status::ExitStatus;

/// Dispatch parsed arguments, working relative to the current directory.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    match args.command {
        Some(Command::Init) => commands::init::init(&cwd),
        None => commands::generate::generate(&args.generate, &cwd),
    }
}
