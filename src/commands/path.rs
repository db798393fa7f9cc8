//! Path command: print a single prettified path

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::config::Config;
use crate::prompt::{prettifier_for, Environment};

/// Handles the path command; without an argument the working directory is used
pub fn handle_path_command(config: &Config, env: &Environment, path: Option<&Path>) -> Result<()> {
    let target = match (path, env.cwd.as_deref()) {
        (Some(path), _) => path,
        (None, Some(cwd)) => cwd,
        (None, None) => anyhow::bail!("Working directory is unavailable"),
    };

    let pretty = prettifier_for(env, config)
        .prettify(target, config.max_path_length)
        .with_context(|| format!("Failed to prettify {}", target.display()))?;
    println!("{pretty}");
    Ok(())
}
