mod build;
mod clean;

use anyhow::Result;

use crate::cli::{BuildArgs, Command};

pub fn run(command: Option<Command>) -> Result<()> {
    // A bare invocation is a full rebuild.
    match command.unwrap_or_else(|| Command::Build(BuildArgs::default())) {
        Command::Build(args) => build::run_build_command(args),
        Command::Clean(args) => clean::run_clean_command(args),
    }
}
