// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Answer collection and commit message assembly.

use crate::jira::JiraId;

use super::questions::Prefix;

/// The validated answers collected for one commit.
///
/// Every field except `prefix` and `subject` may be empty; empty fields are
/// omitted from the assembled message.
#[derive(Debug, Clone)]
pub struct Answers {
    /// Commit prefix (fix, feat, ...).
    pub prefix: Prefix,
    /// Optional single lowercase word.
    pub scope: String,
    /// Short imperative summary, no trailing period.
    pub subject: String,
    /// Optional body, wrapped to 72 columns.
    pub body: String,
    /// Optional breaking-change details.
    pub breaking_changes: String,
    /// Jira IDs for the trailer block, in order of first appearance.
    pub jira_ids: Vec<JiraId>,
}

impl Answers {
    /// Create answers with the two required fields.
    pub fn new(prefix: Prefix, subject: impl Into<String>) -> Self {
        Self {
            prefix,
            scope: String::new(),
            subject: subject.into(),
            body: String::new(),
            breaking_changes: String::new(),
            jira_ids: Vec::new(),
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the breaking-change details.
    pub fn with_breaking_changes(mut self, details: impl Into<String>) -> Self {
        self.breaking_changes = details.into();
        self
    }

    /// Set the Jira IDs.
    pub fn with_jira_ids(mut self, ids: Vec<JiraId>) -> Self {
        self.jira_ids = ids;
        self
    }

    /// Get the header line of the message.
    pub fn header(&self) -> String {
        let mut header = String::from(self.prefix.as_str());

        if self.scope.is_empty() {
            header.push_str(": ");
        } else {
            header.push('(');
            header.push_str(&self.scope);
            header.push_str("): ");
        }

        header.push_str(&self.subject);
        header
    }
}

/// Assemble the final commit message from validated answers.
///
/// Produces `prefix(scope): subject`, a blank-line-separated body when
/// present, and a trailer block with `BREAKING CHANGES:` and `Jira-Id:`
/// lines when present. The result is trimmed.
pub fn render(answers: &Answers) -> String {
    let mut message = answers.header();

    if !answers.body.is_empty() {
        message.push_str("\n\n");
        message.push_str(&answers.body);
    }

    let mut trailer = String::from("\n\n");
    if !answers.breaking_changes.is_empty() {
        trailer.push_str("BREAKING CHANGES: ");
        trailer.push_str(&answers.breaking_changes);
        trailer.push('\n');
    }
    if !answers.jira_ids.is_empty() {
        let lines: Vec<String> = answers
            .jira_ids
            .iter()
            .map(|id| format!("Jira-Id: {}", id))
            .collect();
        trailer.push_str(&lines.join("\n"));
    }
    message.push_str(&trailer);

    message.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jira::JiraExtractor;

    fn ids(text: &str) -> Vec<JiraId> {
        JiraExtractor::new(None).extract(text)
    }

    #[test]
    fn test_minimal_message() {
        let answers = Answers::new(Prefix::Fix, "Fix bug");
        assert_eq!(render(&answers), "fix: Fix bug");
    }

    #[test]
    fn test_message_with_scope_and_jira_id() {
        let answers = Answers::new(Prefix::Feat, "Add endpoint")
            .with_scope("api")
            .with_jira_ids(ids("AB-12"));
        assert_eq!(render(&answers), "feat(api): Add endpoint\n\nJira-Id: AB-12");
    }

    #[test]
    fn test_message_with_body() {
        let answers = Answers::new(Prefix::Docs, "Describe the flow").with_body("Some context.");
        assert_eq!(
            render(&answers),
            "docs: Describe the flow\n\nSome context."
        );
    }

    #[test]
    fn test_message_with_breaking_changes() {
        let answers =
            Answers::new(Prefix::Refactor, "Rework API").with_breaking_changes("Renames endpoints");
        assert_eq!(
            render(&answers),
            "refactor: Rework API\n\nBREAKING CHANGES: Renames endpoints"
        );
    }

    #[test]
    fn test_full_message() {
        let answers = Answers::new(Prefix::Feat, "Add endpoint")
            .with_scope("api")
            .with_body("Adds the frob endpoint.")
            .with_breaking_changes("Removes the old endpoint")
            .with_jira_ids(ids("AB-12 CD-34"));
        assert_eq!(
            render(&answers),
            "feat(api): Add endpoint\n\n\
             Adds the frob endpoint.\n\n\
             BREAKING CHANGES: Removes the old endpoint\n\
             Jira-Id: AB-12\n\
             Jira-Id: CD-34"
        );
    }

    #[test]
    fn test_header_without_scope_keeps_colon() {
        let answers = Answers::new(Prefix::Chore, "Tidy up");
        assert_eq!(answers.header(), "chore: Tidy up");
    }
}
