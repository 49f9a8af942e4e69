// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-field validators and filters.
//!
//! Each prompt answer passes through one of these before it is stored. They
//! fail fast, one field at a time.

use crate::error::ValidationError;
use crate::jira::{JiraExtractor, JiraId, JIRA_ID_PATTERN};

/// Column width commit bodies are wrapped to.
pub const BODY_WIDTH: usize = 72;

/// Validate and normalize the commit subject.
///
/// Trims whitespace, then trailing periods. The result must be non-empty.
pub fn validate_subject(subject: &str) -> Result<String, ValidationError> {
    let subject = subject.trim().trim_end_matches('.').trim_end();

    if subject.is_empty() {
        return Err(ValidationError::RequiredField { field: "Subject" });
    }

    Ok(subject.to_string())
}

/// Validate the commit scope.
///
/// An empty scope passes through unchanged; otherwise it must be a single
/// all-lowercase word.
pub fn validate_scope(scope: &str) -> Result<String, ValidationError> {
    if scope.is_empty() {
        return Ok(String::new());
    }

    let scope = scope.trim();

    if scope.chars().any(char::is_uppercase) {
        return Err(ValidationError::InvalidScope {
            scope: scope.to_string(),
            reason: "should be all-lowercase",
        });
    }
    if scope.split_whitespace().count() > 1 {
        return Err(ValidationError::InvalidScope {
            scope: scope.to_string(),
            reason: "should be one word",
        });
    }

    Ok(scope.to_string())
}

/// Wrap the commit body to 72 characters.
///
/// Runs of blank lines collapse to single paragraph breaks; each paragraph
/// is re-wrapped, and paragraph breaks are preserved.
pub fn wrap_commit_body(body: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
        .iter()
        .map(|p| textwrap::fill(p, BODY_WIDTH))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Validate the Jira IDs answer.
///
/// An empty answer yields no IDs; a non-empty answer must mention at least
/// one ID recognizable by the extractor.
pub fn validate_jira_ids(
    extractor: &JiraExtractor,
    input: &str,
) -> Result<Vec<JiraId>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let ids = extractor.extract(input);
    if ids.is_empty() {
        return Err(ValidationError::InvalidJiraIds {
            input: input.to_string(),
            pattern: JIRA_ID_PATTERN.to_string(),
        });
    }

    Ok(ids)
}
