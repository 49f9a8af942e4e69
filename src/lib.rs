// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CJ - Conventional Commit Assistant with Jira Trailers
//!
//! A CLI tool that creates and validates commit messages following a house
//! convention: enumerated type prefixes, an optional single-word lowercase
//! scope, a 72-column body, and `BREAKING CHANGES:` / `Jira-Id:` trailers.
//!
//! # Features
//!
//! - **Interactive Commit Builder**: Guided commit creation with live preview
//! - **Jira Ticket Trailers**: IDs inferred from CI variables or the branch
//!   name and enforced as `Jira-Id:` trailer lines
//! - **Schema Validation**: A derived acceptance pattern for commit subjects
//! - **Batch Checking**: Validate whole commit ranges, reporting every bad
//!   commit in one pass
//!
//! # Example
//!
//! ```no_run
//! use cj::config::CjConfig;
//! use cj::convention::{discover, Convention};
//!
//! // Load configuration and obtain the convention
//! let config = CjConfig::load().unwrap();
//! let convention = discover(&config);
//!
//! // The pattern commit subjects must satisfy
//! println!("{}", convention.schema_pattern());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod convention;
pub mod error;
pub mod git;
pub mod jira;
pub mod rules;

// Re-exports for convenience
pub use config::CjConfig;
pub use error::{CjError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cj.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
