//! Default command: print the full prompt

use anyhow::Result;
use std::io::Write;

use crate::color::Painter;
use crate::core::config::Config;
use crate::git::inspect_repo;
use crate::prompt::{render_prompt, Environment};

/// Handles the prompt command
pub async fn handle_prompt_command(config: &Config, env: &Environment, no_color: bool) -> Result<()> {
    let painter = Painter::from_env(no_color, env.no_color.as_deref());

    let repo = match &env.cwd {
        Some(cwd) => inspect_repo(cwd, config.git_timeout()).await,
        None => None,
    };

    let prompt = render_prompt(env, config, &painter, repo.as_ref(), &chrono::Local::now());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
