//! Working tree status and dirtiness classification

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use super::operations::run_git;

// Git command arguments
const GIT_STATUS_PORCELAIN_ARGS: &[&str] = &["status", "--porcelain"];

/// Status codes that mean tracked content changed
const MODIFIED_CODES: &[char] = &['M', 'R', 'D', 'U'];
/// Status codes that mean new content appeared
const UNTRACKED_CODES: &[char] = &['A', '?'];

/// File name to porcelain status code, e.g. `src/main.rs -> "M"`
pub type StatusMap = HashMap<String, String>;

/// How dirty a working tree is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dirtiness {
    /// Nothing to report
    Clean,
    /// Only untracked or newly added files
    Untracked,
    /// Modified, renamed, deleted or unmerged files
    Modified,
}

impl Dirtiness {
    /// Classifies a status map; modifications outrank untracked files
    pub fn classify(statuses: &StatusMap) -> Self {
        let mut has_untracked = false;
        let mut has_modified = false;

        for code in statuses.values() {
            has_untracked = has_untracked || code.contains(UNTRACKED_CODES);
            has_modified = has_modified || code.contains(MODIFIED_CODES);
        }

        if has_modified {
            Dirtiness::Modified
        } else if has_untracked {
            Dirtiness::Untracked
        } else {
            Dirtiness::Clean
        }
    }

    /// Returns the text representation of this state
    pub fn text(&self) -> &str {
        match self {
            Dirtiness::Clean => "clean",
            Dirtiness::Untracked => "untracked",
            Dirtiness::Modified => "modified",
        }
    }
}

/// Parses `git status --porcelain` output into a status map.
///
/// Lines are trimmed before splitting on the first space, so ` M file` and
/// `M  file` both map `file` to `M`.
pub fn parse_porcelain(output: &str) -> StatusMap {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| line.split_once(' '))
        .map(|(code, file)| (file.trim_start().to_string(), code.to_string()))
        .collect()
}

/// Runs `git status --porcelain` in `path`; `None` when git fails
pub async fn current_status(path: &Path, timeout: Duration) -> Option<StatusMap> {
    match run_git(path, GIT_STATUS_PORCELAIN_ARGS, timeout).await {
        Ok((true, stdout, _)) => Some(parse_porcelain(&stdout)),
        Ok((false, _, stderr)) => {
            debug!("git status failed in {}: {}", path.display(), stderr);
            None
        }
        Err(e) => {
            debug!("git status could not run in {}: {}", path.display(), e);
            None
        }
    }
}
