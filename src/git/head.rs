//! Reading the current branch from `HEAD`

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::core::config::SHORT_HASH_LEN;

const HEAD_FILE_NAME: &str = "HEAD";
const SHA1_HEX_LEN: usize = 40;
const SHA256_HEX_LEN: usize = 64;

/// What `HEAD` points at
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Head {
    /// A symbolic ref such as `ref: refs/heads/main`
    Branch(String),
    /// A bare commit hash, shortened
    Detached(String),
    /// Contents that could not be understood
    Unknown(String),
}

impl Head {
    /// Name shown in the prompt
    pub fn label(&self) -> String {
        match self {
            Head::Branch(name) | Head::Detached(name) => name.clone(),
            Head::Unknown(raw) => format!("BAD_REF_SPEC ({raw})"),
        }
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn is_commit_hash(s: &str) -> bool {
    (s.len() == SHA1_HEX_LEN || s.len() == SHA256_HEX_LEN)
        && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses the contents of a `HEAD` file.
///
/// `ref: refs/heads/feature/x` yields `feature/x`; everything after the
/// second `/` is the branch name.
pub fn parse_head(contents: &str) -> Head {
    let refspec = contents.trim();
    let parts: Vec<&str> = refspec.splitn(3, '/').collect();

    match parts.as_slice() {
        [_, _, branch] => Head::Branch(branch.trim().to_string()),
        [hash] if is_commit_hash(hash) => Head::Detached(hash[..SHORT_HASH_LEN].to_string()),
        _ => Head::Unknown(refspec.to_string()),
    }
}

/// Reads and parses `<git_dir>/HEAD`; `None` when it cannot be read
pub async fn read_head(git_dir: &Path) -> Option<Head> {
    let head_path = git_dir.join(HEAD_FILE_NAME);
    match tokio::fs::read_to_string(&head_path).await {
        Ok(contents) => Some(parse_head(&contents)),
        Err(e) => {
            debug!("Failed to read {}: {}", head_path.display(), e);
            None
        }
    }
}
