//! Git repository inspection
//!
//! This module answers the two questions the prompt asks about a directory:
//! - which branch is checked out (by reading `HEAD` directly)
//! - how dirty the working tree is (via `git status --porcelain`)

pub(crate) mod discovery;
pub(crate) mod head;
pub(crate) mod operations;
pub(crate) mod repo;
pub(crate) mod status;

pub use discovery::find_git_dir;
pub use head::{parse_head, read_head, Head};
pub use operations::run_git;
pub use repo::{inspect_repo, RepoState};
pub use status::{current_status, parse_porcelain, Dirtiness, StatusMap};
