// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Jira ticket ID extraction.
//!
//! IDs are recognized either fully qualified (`PROJ-123`) or, when a default
//! project prefix is configured, as bare 2-5 digit numbers that get qualified
//! with that prefix.

use crate::config::CjConfig;
use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Pattern for a fully-qualified Jira ticket ID.
pub const JIRA_ID_PATTERN: &str = "[A-Z]{2,10}-[0-9]{2,5}";

/// Pattern for a bare ticket number: 2-5 digits at the start of the text or
/// after any character that is not a dash, digit, or uppercase letter.
const BARE_NUMBER_PATTERN: &str = "(^|[^-0-9A-Z])([0-9]{2,5})";

lazy_static! {
    static ref JIRA_ID_RE: Regex = Regex::new(JIRA_ID_PATTERN).unwrap();
    static ref BARE_NUMBER_RE: Regex = Regex::new(BARE_NUMBER_PATTERN).unwrap();
    static ref FULL_ID_RE: Regex = Regex::new(&format!("^{}$", JIRA_ID_PATTERN)).unwrap();
}

/// A single Jira ticket ID, e.g. `PROJ-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JiraId(String);

impl JiraId {
    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JiraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JiraId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if FULL_ID_RE.is_match(s) {
            Ok(JiraId(s.to_string()))
        } else {
            Err(ValidationError::InvalidJiraIds {
                input: s.to_string(),
                pattern: JIRA_ID_PATTERN.to_string(),
            })
        }
    }
}

/// Extracts Jira IDs from free text and branch names.
#[derive(Debug, Clone, Default)]
pub struct JiraExtractor {
    prefix: Option<String>,
}

impl JiraExtractor {
    /// Create an extractor with an optional default project prefix.
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Create an extractor from the loaded configuration.
    pub fn from_config(config: &CjConfig) -> Self {
        Self::new(config.jira.prefix.clone())
    }

    /// Extract every Jira ID mentioned in `text`.
    ///
    /// Fully-qualified IDs come first, in order of appearance; bare numbers
    /// qualified with the configured prefix are appended after them.
    /// Duplicates are preserved.
    pub fn extract(&self, text: &str) -> Vec<JiraId> {
        let mut ids: Vec<JiraId> = JIRA_ID_RE
            .find_iter(text)
            .map(|m| JiraId(m.as_str().to_string()))
            .collect();

        if let Some(ref prefix) = self.prefix {
            for caps in BARE_NUMBER_RE.captures_iter(text) {
                if let Some(num) = caps.get(2) {
                    ids.push(JiraId(format!("{}-{}", prefix, num.as_str())));
                }
            }
        }

        ids
    }

    /// Extract Jira IDs from the CI environment or the current branch.
    ///
    /// Returns `None` when no branch can be resolved or the branch name
    /// mentions no ID.
    pub fn ids_from_env_or_branch(&self) -> Option<Vec<JiraId>> {
        let branch = crate::git::branch_name()?;
        let ids = self.extract(&branch);
        if ids.is_empty() {
            None
        } else {
            Some(ids)
        }
    }
}
