// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Current branch resolution.
//!
//! In CI the checked-out HEAD may be detached, so the CI-provided branch
//! variables take precedence over asking git.

use super::repo::Repository;

/// CI variable carrying the merge-request source branch.
pub const MERGE_REQUEST_BRANCH_ENV: &str = "CI_MERGE_REQUEST_SOURCE_BRANCH_NAME";

/// CI variable carrying the branch a pipeline commit was pushed to.
pub const COMMIT_BRANCH_ENV: &str = "CI_COMMIT_BRANCH";

/// Resolve the governing branch name.
///
/// Checks the merge-request source branch variable, then the commit branch
/// variable, then the repository HEAD. Returns `None` when all three are
/// unavailable.
pub fn branch_name() -> Option<String> {
    for var in [MERGE_REQUEST_BRANCH_ENV, COMMIT_BRANCH_ENV] {
        if let Ok(name) = std::env::var(var) {
            if !name.is_empty() {
                tracing::debug!("Branch name from {}: {}", var, name);
                return Some(name);
            }
        }
    }

    let repo = Repository::open_current().ok()?;
    repo.branch_name().ok()
}
