//! Locating the git directory of the repository containing a path

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::{GIT_DIR_NAME, GIT_FILE_SCAN_LINES};

const GITDIR_PREFIX: &str = "gitdir:";

/// Reads the `gitdir:` target of a `.git` file (submodules and worktrees)
/// Only reads the first few lines
fn read_gitdir_file(path: &Path) -> Option<PathBuf> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Failed to open {}: {}", path.display(), e);
            return None;
        }
    };

    let target = BufReader::new(file)
        .lines()
        .take(GIT_FILE_SCAN_LINES)
        .map_while(Result::ok)
        .find_map(|line| {
            line.trim_start()
                .strip_prefix(GITDIR_PREFIX)
                .map(|rest| rest.trim().to_string())
        })?;

    if target.is_empty() {
        return None;
    }

    let target = PathBuf::from(target);
    if target.is_absolute() {
        Some(target)
    } else {
        path.parent().map(|parent| parent.join(target))
    }
}

/// Walks up from `start` to the filesystem root looking for a `.git` entry.
///
/// Returns the git directory itself: the `.git` directory, or the target of a
/// `.git` file. `start` is expected to be absolute.
pub fn find_git_dir(start: impl AsRef<Path>) -> Option<PathBuf> {
    for dir in start.as_ref().ancestors() {
        let candidate = dir.join(GIT_DIR_NAME);
        let metadata = match fs::metadata(&candidate) {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };

        if metadata.is_dir() {
            return Some(candidate);
        }
        if metadata.is_file() {
            if let Some(git_dir) = read_gitdir_file(&candidate) {
                return Some(git_dir);
            }
            debug!("Ignoring {} without a gitdir line", candidate.display());
        }
    }

    None
}
