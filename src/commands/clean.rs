use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::CleanArgs;

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to recreate {}", path.display()))?;
    }
    Ok(())
}

fn remove_path(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    if path.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory {}", path.display()))?;
    } else {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove file {}", path.display()))?;
    }

    Ok(true)
}

pub fn run_clean_command(args: CleanArgs) -> Result<()> {
    let root = match args.root {
        Some(path) => PathBuf::from(path),
        None => env::current_dir().context("failed to resolve current directory")?,
    };
    let dist = root.join("dist");

    let removed = remove_path(&dist)?;
    ensure_directory(&dist)?;

    if removed {
        println!("Removed dist output and created a fresh dist/ directory.");
    } else {
        println!("Created empty dist/ directory (nothing to remove).");
    }

    Ok(())
}
