//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{checkout_new_branch, create_test_commit, git, setup_git_repo};

/// A test repository with automatic cleanup
pub struct TestRepo {
    pub temp_dir: TempDir,
}

impl TestRepo {
    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a new file in the repository
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create a nested directory inside the repository
    pub fn create_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.path().join(name);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Stage a file without committing it
    pub fn stage(&self, name: &str) -> Result<()> {
        git(self.path(), &["add", name])?;
        Ok(())
    }

    /// Delete a tracked file from the working tree
    pub fn remove_file(&self, name: &str) -> Result<()> {
        std::fs::remove_file(self.path().join(name))?;
        Ok(())
    }
}

/// Builder for creating test repositories
pub struct TestRepoBuilder {
    branch: Option<String>,
    with_commits: usize,
}

impl TestRepoBuilder {
    pub fn new() -> Self {
        Self {
            branch: None,
            with_commits: 1,
        }
    }

    /// Check out a new branch after the initial commits
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_commits(mut self, count: usize) -> Self {
        self.with_commits = count;
        self
    }

    pub fn build(self) -> Result<TestRepo> {
        let temp_dir = TempDir::new()?;
        setup_git_repo(temp_dir.path())?;

        // Create initial commit
        create_test_commit(temp_dir.path(), "README.md", "# Test Repo", "Initial commit")?;

        // Create additional commits if specified
        for i in 2..=self.with_commits {
            create_test_commit(
                temp_dir.path(),
                &format!("file{}.txt", i),
                &format!("Content {}", i),
                &format!("Commit {}", i),
            )?;
        }

        if let Some(branch) = &self.branch {
            checkout_new_branch(temp_dir.path(), branch)?;
        }

        Ok(TestRepo { temp_dir })
    }
}
