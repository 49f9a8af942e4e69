// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CjError, GitError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// A commit as read from the repository during validation.
#[derive(Debug, Clone)]
pub struct Commit {
    /// Full revision hash.
    pub rev: String,
    /// Author name.
    pub author: String,
    /// Author email.
    pub author_email: String,
    /// Full commit message.
    pub message: String,
}

impl Commit {
    /// Short revision hash for display.
    pub fn short_rev(&self) -> &str {
        &self.rev[..7.min(self.rev.len())]
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CjError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CjError::Git(GitError::NotARepository)
            } else {
                CjError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                CjError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the current branch name.
    pub fn branch_name(&self) -> Result<String> {
        let head = self.inner.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                CjError::Git(GitError::DetachedHead)
            } else {
                CjError::Git(GitError::BranchFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        if head.is_branch() {
            let name = head.shorthand().ok_or_else(|| {
                CjError::Git(GitError::BranchFailed {
                    message: "Invalid branch name encoding".to_string(),
                })
            })?;
            Ok(name.to_string())
        } else {
            Err(CjError::Git(GitError::DetachedHead))
        }
    }

    /// Get the HEAD commit.
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.inner.head().map_err(|e| {
            CjError::Git(GitError::BranchFailed {
                message: e.message().to_string(),
            })
        })?;

        let commit = head.peel_to_commit().map_err(|e| {
            CjError::Git(GitError::InvalidReference {
                reference: format!("HEAD: {}", e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CjError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CjError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get commits in a range.
    ///
    /// A `from..to` range walks the commits reachable from `to` but not
    /// `from`; a single reference yields just that commit.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<Commit>> {
        if let Some((from, to)) = range.split_once("..") {
            let from = self.get_commit(from)?;
            let to = self.get_commit(to)?;

            let mut revwalk = self.inner.revwalk().map_err(|e| {
                CjError::Git(GitError::CommandFailed {
                    command: "revwalk".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            revwalk.push(to.id()).map_err(|e| {
                CjError::Git(GitError::CommandFailed {
                    command: "revwalk.push".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            revwalk.hide(from.id()).map_err(|e| {
                CjError::Git(GitError::CommandFailed {
                    command: "revwalk.hide".to_string(),
                    message: e.message().to_string(),
                })
            })?;

            let mut commits = Vec::new();
            for oid_result in revwalk {
                let oid = oid_result.map_err(|e| {
                    CjError::Git(GitError::CommandFailed {
                        command: "revwalk".to_string(),
                        message: e.message().to_string(),
                    })
                })?;
                let commit = self.inner.find_commit(oid).map_err(|e| {
                    CjError::Git(GitError::InvalidReference {
                        reference: format!("{}: {}", oid, e.message()),
                    })
                })?;
                commits.push(to_commit(&commit));
            }

            Ok(commits)
        } else {
            let commit = self.get_commit(range)?;
            Ok(vec![to_commit(&commit)])
        }
    }

    /// Check if there are staged changes.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let head = self.inner.head().ok();
        let head_tree = head.as_ref().and_then(|h| h.peel_to_tree().ok());

        let diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .map_err(|e| {
                CjError::Git(GitError::CommandFailed {
                    command: "diff".to_string(),
                    message: e.message().to_string(),
                })
            })?;

        Ok(diff.stats().map(|s| s.files_changed() > 0).unwrap_or(false))
    }
}

fn to_commit(commit: &git2::Commit<'_>) -> Commit {
    let author = commit.author();
    Commit {
        rev: commit.id().to_string(),
        author: author.name().unwrap_or("").to_string(),
        author_email: author.email().unwrap_or("").to_string(),
        message: commit.message().unwrap_or("").to_string(),
    }
}

/// Get commits in a range from the current repository.
pub fn get_commit_range(range: &str) -> Result<Vec<Commit>> {
    let repo = Repository::open_current()?;
    repo.get_commits_in_range(range)
}
