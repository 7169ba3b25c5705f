use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::BuildArgs;
use crate::config::SiteConfig;
use crate::render::build_site;
use crate::report::ConsoleReporter;

pub fn run_build_command(args: BuildArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    let config = SiteConfig::new(root);
    let reporter = ConsoleReporter {
        verbose: args.verbose,
    };
    build_site(&config, &reporter)
}

fn resolve_root(root: Option<&str>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(PathBuf::from(path)),
        None => env::current_dir().context("failed to resolve current directory"),
    }
}
