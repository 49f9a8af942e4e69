// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for staging and committing.

use crate::error::{CjError, GitError, Result};
use std::process::Command;

use super::repo::Repository;

/// Stage all modified and deleted files.
pub fn stage_all() -> Result<()> {
    let repo = Repository::open_current()?;
    let mut index = repo.inner().index().map_err(|e| {
        CjError::Git(GitError::CommandFailed {
            command: "index".to_string(),
            message: e.message().to_string(),
        })
    })?;

    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .map_err(|e| {
            CjError::Git(GitError::CommandFailed {
                command: "add all".to_string(),
                message: e.message().to_string(),
            })
        })?;

    index.write().map_err(|e| {
        CjError::Git(GitError::CommandFailed {
            command: "write index".to_string(),
            message: e.message().to_string(),
        })
    })?;

    Ok(())
}

/// Create a commit with the given message.
pub fn create_commit(message: &str, sign: bool) -> Result<String> {
    let repo = Repository::open_current()?;

    if !repo.has_staged_changes()? {
        return Err(CjError::Git(GitError::NoStagedChanges));
    }

    if sign {
        // Use the git command for signed commits, git2 signing is involved
        run_git_commit(message, &["-S"])?;
        let new_head = repo.head_commit()?;
        return Ok(new_head.id().to_string());
    }

    let sig = repo.inner().signature().map_err(|e| {
        CjError::Git(GitError::CommitFailed {
            message: format!("Failed to get signature: {}", e.message()),
        })
    })?;

    let mut index = repo.inner().index().map_err(|e| {
        CjError::Git(GitError::CommitFailed {
            message: format!("Failed to get index: {}", e.message()),
        })
    })?;
    let tree_id = index.write_tree().map_err(|e| {
        CjError::Git(GitError::CommitFailed {
            message: format!("Failed to write tree: {}", e.message()),
        })
    })?;
    let tree = repo.inner().find_tree(tree_id).map_err(|e| {
        CjError::Git(GitError::CommitFailed {
            message: format!("Failed to find tree: {}", e.message()),
        })
    })?;

    let parents: Vec<git2::Commit<'_>> = if let Ok(head) = repo.head_commit() {
        vec![head]
    } else {
        vec![] // Initial commit, no parents
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    let commit_oid = repo
        .inner()
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .map_err(|e| {
            CjError::Git(GitError::CommitFailed {
                message: e.message().to_string(),
            })
        })?;

    Ok(commit_oid.to_string())
}

/// Amend the last commit with a new message.
pub fn amend_commit(message: &str, sign: bool) -> Result<String> {
    let mut extra: Vec<&str> = vec!["--amend"];
    if sign {
        extra.push("-S");
    }
    run_git_commit(message, &extra)?;

    let repo = Repository::open_current()?;
    let new_head = repo.head_commit()?;
    Ok(new_head.id().to_string())
}

/// Run `git commit -m <message>` with extra arguments.
fn run_git_commit(message: &str, extra_args: &[&str]) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.arg("commit");
    cmd.arg("-m").arg(message);
    cmd.args(extra_args);

    let output = cmd.output().map_err(|e| {
        CjError::Git(GitError::CommitFailed {
            message: format!("Failed to run git commit: {}", e),
        })
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CjError::Git(GitError::CommitFailed {
            message: stderr.to_string(),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo_with_file() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();

        std::process::Command::new("git")
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        std::process::Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        std::process::Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        fs::write(dir.path().join("test.txt"), "hello").unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_stage_and_detect_changes() {
        let (_dir, repo) = create_test_repo_with_file();

        let mut index = repo.inner().index().unwrap();
        index.add_path(std::path::Path::new("test.txt")).unwrap();
        index.write().unwrap();

        assert!(repo.has_staged_changes().unwrap());
    }
}
