//! Snapshot of the process environment used by the prompt

use std::path::PathBuf;

use tracing::debug;

use crate::core::config::NO_COLOR_ENV_VAR;

/// Everything the prompt reads from the outside world, captured once so the
/// rendering code stays deterministic
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub home: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub cwd: Option<PathBuf>,
    pub no_color: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn hostname() -> Option<String> {
    match nix::unistd::gethostname() {
        Ok(name) => Some(name.to_string_lossy().into_owned()),
        Err(e) => {
            debug!("Failed to read hostname: {}", e);
            None
        }
    }
}

impl Environment {
    pub fn capture() -> Self {
        let cwd = match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                debug!("Failed to read working directory: {}", e);
                None
            }
        };

        Self {
            home: non_empty_var("HOME"),
            user: non_empty_var("USER"),
            host: hostname(),
            cwd,
            no_color: std::env::var(NO_COLOR_ENV_VAR).ok(),
        }
    }
}
