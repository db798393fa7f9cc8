//! Combined repository lookup for the prompt

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use super::discovery::find_git_dir;
use super::head::{read_head, Head};
use super::status::{current_status, Dirtiness};

/// Branch and working-tree state of the repository containing a directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoState {
    pub git_dir: PathBuf,
    pub head: Option<Head>,
    pub dirtiness: Dirtiness,
}

impl RepoState {
    /// Text shown in the branch segment; empty when HEAD is unreadable
    pub fn branch_label(&self) -> String {
        self.head.as_ref().map(Head::label).unwrap_or_default()
    }
}

/// Looks up the repository containing `dir`.
///
/// Returns `None` outside a repository. HEAD parsing and `git status` run
/// concurrently; a failing `git status` counts as clean.
pub async fn inspect_repo(dir: &Path, timeout: Duration) -> Option<RepoState> {
    let Some(git_dir) = find_git_dir(dir) else {
        debug!("No git directory above {}", dir.display());
        return None;
    };

    let (head, statuses) = tokio::join!(read_head(&git_dir), current_status(dir, timeout));
    let dirtiness = statuses
        .as_ref()
        .map(Dirtiness::classify)
        .unwrap_or(Dirtiness::Clean);

    debug!(
        "Repository at {}: head={:?} state={}",
        git_dir.display(),
        head,
        dirtiness.text()
    );

    Some(RepoState {
        git_dir,
        head,
        dirtiness,
    })
}
