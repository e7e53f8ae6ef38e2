use std::{fs::OpenOptions, path::Path};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Logs to stderr, or appends to `file` when the terminal UI owns the screen.
pub fn init_logger(file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info).parse_default_env();

    if let Some(path) = file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .with_context(|| "Logger already initialized")?;

    Ok(())
}
