use std::path::Path;

use anyhow::Result;

use super::super::args::GenerateArgs;
use super::super::exit_status::ExitStatus;
use super::super::report::print_generated;
use crate::config::{Settings, load_config};
use crate::pipeline;

/// Resolve settings for a run started in `dir`.
///
/// Precedence: command-line flags, then the config file, then defaults.
pub fn resolve_settings(args: &GenerateArgs, dir: &Path) -> Result<Settings> {
    let mut settings = Settings::from_config(load_config(dir)?);

    if let Some(input) = &args.input {
        settings.input = input.clone();
    }
    if let Some(column) = &args.column {
        settings.column = column.clone();
    }
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if let Some(export_name) = &args.export_name {
        settings.export_name = export_name.clone();
    }

    settings.validate()?;
    Ok(settings)
}

pub fn generate(args: &GenerateArgs, dir: &Path) -> Result<ExitStatus> {
    let settings = resolve_settings(args, dir)?;
    let summary = pipeline::run(&settings)?;
    print_generated(&summary, args.verbose);
    Ok(ExitStatus::Success)
}
