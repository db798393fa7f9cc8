//! Prompt assembly

use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use tracing::warn;

use super::Environment;
use crate::color::{color_hash, Painter};
use crate::core::config::{Config, PROMPT_FIRST_LINE_PREFIX, PROMPT_SECOND_LINE};
use crate::git::RepoState;
use crate::path::PathPrettifier;

/// Formats `now` with a `chrono` format string, falling back to Unix seconds
/// when the format is invalid
pub fn format_time<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        warn!("Invalid time format {:?}, using Unix seconds", format);
        return now.timestamp().to_string();
    }
    out
}

/// `[user@host]` with brackets and `@` in a color derived from the pair
pub fn user_and_host(user: &str, host: &str, painter: &Painter) -> String {
    let color = color_hash(&format!("{user}{host}"));
    format!(
        "{}{user}{}{host}{}",
        painter.paint_rgb("[", color),
        painter.paint_rgb("@", color),
        painter.paint_rgb("]", color),
    )
}

/// Builds the prettifier the prompt uses for `env` and `config`
pub fn prettifier_for(env: &Environment, config: &Config) -> PathPrettifier {
    let prettifier = PathPrettifier::new()
        .with_home(env.home.as_deref())
        .with_truncator(config.truncator);
    match &env.cwd {
        Some(cwd) => prettifier.with_working_dir(cwd),
        None => prettifier,
    }
}

/// The shortened working directory, or an empty string when it is unknown
pub fn pretty_cwd(env: &Environment, config: &Config) -> String {
    let Some(cwd) = &env.cwd else {
        warn!("Working directory unavailable");
        return String::new();
    };

    match prettifier_for(env, config).prettify(cwd, config.max_path_length) {
        Ok(path) => path,
        Err(e) => {
            warn!("{}", e);
            String::new()
        }
    }
}

/// Renders both prompt lines, including the trailing newline.
///
/// The branch segment is left out entirely outside a repository.
pub fn render_prompt<Tz>(
    env: &Environment,
    config: &Config,
    painter: &Painter,
    repo: Option<&RepoState>,
    now: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let time = painter.paint(&format_time(now, &config.time_format), config.time_color);
    let user_host = user_and_host(
        env.user.as_deref().unwrap_or_default(),
        env.host.as_deref().unwrap_or_default(),
        painter,
    );
    let path = painter.paint(&pretty_cwd(env, config), config.path_color);

    let branch = match repo {
        Some(state) => format!(
            " {}",
            painter.paint(&state.branch_label(), config.branch_color(state.dirtiness))
        ),
        None => String::new(),
    };

    format!("{PROMPT_FIRST_LINE_PREFIX}{time} {user_host} {path}{branch}\n{PROMPT_SECOND_LINE}\n")
}
