// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.

use crate::error::{CjError, Result, ValidationError};
use crate::git::Commit;
use crate::jira::{JiraExtractor, JiraId};

use regex::Regex;

use super::validator::{BatchReport, CommitFailure};
use crate::convention::schema;

/// Subjects that are accepted without schema checking. Merge, revert and
/// autosquash commits are generated by git itself.
const EXEMPT_PREFIXES: &[&str] = &["Merge", "Revert", "Pull request", "fixup!", "squash!"];

/// Validates commit messages against the convention.
///
/// The acceptance pattern is computed once per engine; Jira IDs inferred
/// from the governing branch are required as `Jira-Id:` trailer lines in
/// every non-exempt commit.
#[derive(Debug)]
pub struct RuleEngine {
    pattern: String,
    subject_re: Regex,
    required_ids: Vec<JiraId>,
}

impl RuleEngine {
    /// Create an engine, inferring required Jira IDs from the CI
    /// environment or the current branch.
    pub fn new(extractor: &JiraExtractor) -> Result<Self> {
        let required_ids = extractor.ids_from_env_or_branch().unwrap_or_default();
        tracing::debug!("Branch-required Jira IDs: {:?}", required_ids);
        Self::with_required_ids(required_ids)
    }

    /// Create an engine with an explicit set of required Jira IDs.
    pub fn with_required_ids(required_ids: Vec<JiraId>) -> Result<Self> {
        let pattern = schema::schema_pattern();
        let subject_re = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
            CjError::WithContext {
                context: "schema pattern".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            pattern,
            subject_re,
            required_ids,
        })
    }

    /// The acceptance pattern in use.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Validate a single commit message.
    ///
    /// An empty message is an error unless `allow_empty_message` is set
    /// (an aborted editor session leaves an empty message). Exempt subjects
    /// pass unchecked. Otherwise the message splits on the first blank line:
    /// the subject must match the schema from the start and stay on one
    /// physical line, and every required Jira ID must appear in the body as
    /// an exact `Jira-Id: <id>` line. All missing IDs are reported together.
    pub fn validate_message(
        &self,
        message: &str,
        allow_empty_message: bool,
    ) -> std::result::Result<(), ValidationError> {
        let message = message.trim_end();

        if message.is_empty() {
            if allow_empty_message {
                return Ok(());
            }
            return Err(ValidationError::EmptyMessage);
        }

        if EXEMPT_PREFIXES.iter().any(|p| message.starts_with(p)) {
            return Ok(());
        }

        let (subject, body) = match message.split_once("\n\n") {
            Some((subject, body)) => (subject, body),
            None => (message, ""),
        };

        if !self.subject_re.is_match(subject) {
            return Err(ValidationError::SchemaMismatch {
                subject: subject.to_string(),
                pattern: self.pattern.clone(),
            });
        }

        if subject.lines().count() > 1 {
            return Err(ValidationError::MultilineSubject);
        }

        let missing: Vec<String> = self
            .required_ids
            .iter()
            .filter(|id| {
                let trailer = format!("Jira-Id: {}", id);
                !body.lines().any(|line| line.trim_end() == trailer)
            })
            .map(|id| id.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingJiraTrailer { ids: missing });
        }

        Ok(())
    }

    /// Validate a batch of commits, collecting every failure.
    pub fn check_commits(&self, commits: &[Commit], allow_empty_message: bool) -> BatchReport {
        let mut report = BatchReport::new(commits.len());

        for commit in commits {
            if let Err(error) = self.validate_message(&commit.message, allow_empty_message) {
                tracing::debug!("Commit {} rejected: {}", commit.short_rev(), error);
                report.failures.push(CommitFailure::new(commit, error));
            }
        }

        report
    }

    /// Validate a batch of commits, raising one combined error listing
    /// every rejected commit.
    pub fn validate_commits(&self, commits: &[Commit], allow_empty_message: bool) -> Result<()> {
        match self.check_commits(commits, allow_empty_message).into_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
