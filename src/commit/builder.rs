// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive commit builder.
//!
//! Renders the convention's questions one by one, applies each field's
//! filter, previews the assembled message, and creates the commit.

use crate::config::CjConfig;
use crate::convention::{fields, Answers, Convention, Field, JiraConvention, Prefix, QuestionKind};
use crate::error::{CjError, Result, ValidationError};
use crate::git;
use crate::jira::JiraId;
use crate::rules::RuleEngine;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::preview::CommitPreview;

/// Interactive commit builder.
pub struct CommitBuilder {
    convention: JiraConvention,
    prefix: Option<Prefix>,
    scope: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    breaking_changes: Option<String>,
    jira_ids: Option<String>,
}

impl CommitBuilder {
    /// Create a new commit builder for the loaded configuration.
    pub fn new(config: &CjConfig) -> Self {
        Self {
            convention: crate::convention::discover(config),
            prefix: None,
            scope: None,
            subject: None,
            body: None,
            breaking_changes: None,
            jira_ids: None,
        }
    }

    /// Pre-fill the commit prefix from a string.
    pub fn with_prefix_str(mut self, prefix: &str) -> Result<Self> {
        self.prefix = Some(prefix.parse()?);
        Ok(self)
    }

    /// Pre-fill the scope.
    pub fn with_scope(mut self, scope: &str) -> Self {
        if !scope.is_empty() {
            self.scope = Some(scope.to_string());
        }
        self
    }

    /// Pre-fill the subject.
    pub fn with_subject(mut self, subject: &str) -> Self {
        if !subject.is_empty() {
            self.subject = Some(subject.to_string());
        }
        self
    }

    /// Pre-fill the body.
    pub fn with_body(mut self, body: &str) -> Self {
        if !body.is_empty() {
            self.body = Some(body.to_string());
        }
        self
    }

    /// Pre-fill the breaking-change details.
    pub fn with_breaking_changes(mut self, details: &str) -> Self {
        if !details.is_empty() {
            self.breaking_changes = Some(details.to_string());
        }
        self
    }

    /// Pre-fill the Jira IDs answer.
    pub fn with_jira_ids(mut self, raw: &str) -> Self {
        if !raw.is_empty() {
            self.jira_ids = Some(raw.to_string());
        }
        self
    }

    /// Run the interactive commit flow.
    pub fn run_interactive(
        self,
        dry_run: bool,
        skip_confirm: bool,
        sign: bool,
        amend: bool,
    ) -> Result<()> {
        let term = Term::stderr();
        let theme = ColorfulTheme::default();

        let answers = self.collect_answers(&theme)?;
        let message = self.convention.message(&answers);

        term.write_line("")?;
        CommitPreview::new(&answers).print();

        self.check_assembled_message(&message)?;

        if !skip_confirm {
            let confirmed = Confirm::with_theme(&theme)
                .with_prompt("Commit?")
                .default(true)
                .interact()?;

            if !confirmed {
                return Err(CjError::Cancelled);
            }
        }

        if dry_run {
            term.write_line(&format!(
                "\n{} Would create commit:\n{}",
                style("[dry-run]").yellow(),
                message
            ))?;
        } else {
            let sha = if amend {
                git::amend_commit(&message, sign)?
            } else {
                git::create_commit(&message, sign)?
            };

            let short_sha = &sha[..7.min(sha.len())];
            term.write_line(&format!(
                "\n{} {} {}",
                style("✓").green().bold(),
                style(format!("[{}]", short_sha)).cyan(),
                answers.header()
            ))?;
        }

        Ok(())
    }

    /// Commit without interactive prompts.
    pub fn commit_non_interactive(self, dry_run: bool, sign: bool, amend: bool) -> Result<()> {
        let answers = self.build_answers()?;
        let message = self.convention.message(&answers);

        self.check_assembled_message(&message)?;

        if dry_run {
            println!("{}", message);
        } else {
            let sha = if amend {
                git::amend_commit(&message, sign)?
            } else {
                git::create_commit(&message, sign)?
            };
            let short_sha = &sha[..7.min(sha.len())];
            println!("[{}] {}", short_sha, answers.header());
        }

        Ok(())
    }

    /// Walk the convention's questions, prompting for any field not already
    /// pre-filled from the command line.
    fn collect_answers(&self, theme: &ColorfulTheme) -> Result<Answers> {
        let mut prefix = self.prefix;
        let mut scope = match &self.scope {
            Some(raw) => Some(fields::validate_scope(raw)?),
            None => None,
        };
        let mut subject = match &self.subject {
            Some(raw) => Some(fields::validate_subject(raw)?),
            None => None,
        };
        let mut body = self.body.as_deref().map(fields::wrap_commit_body);
        let mut breaking_changes = self.breaking_changes.clone();
        let mut jira_ids: Option<Vec<JiraId>> = match &self.jira_ids {
            Some(raw) => Some(fields::validate_jira_ids(self.convention.extractor(), raw)?),
            None => None,
        };

        for question in self.convention.questions() {
            match question.field {
                Field::Prefix => {
                    if prefix.is_none() {
                        let choices = match &question.kind {
                            QuestionKind::Select { choices } => choices.clone(),
                            QuestionKind::Input => Vec::new(),
                        };
                        let items: Vec<String> = choices
                            .iter()
                            .map(|c| format!("{:10} {}", c.value, style(c.help).dim()))
                            .collect();

                        let selection = Select::with_theme(theme)
                            .with_prompt(question.prompt.clone())
                            .items(&items)
                            .default(0)
                            .interact()?;

                        prefix = Some(choices[selection].value.parse()?);
                    }
                }
                Field::Scope => {
                    if scope.is_none() {
                        let raw: String = Input::with_theme(theme)
                            .with_prompt(question.prompt.clone())
                            .allow_empty(true)
                            .validate_with(|input: &String| {
                                fields::validate_scope(input)
                                    .map(|_| ())
                                    .map_err(|e| e.to_string())
                            })
                            .interact_text()?;
                        scope = Some(fields::validate_scope(&raw)?);
                    }
                }
                Field::Subject => {
                    if subject.is_none() {
                        let raw: String = Input::with_theme(theme)
                            .with_prompt(question.prompt.clone())
                            .validate_with(|input: &String| {
                                fields::validate_subject(input)
                                    .map(|_| ())
                                    .map_err(|e| e.to_string())
                            })
                            .interact_text()?;
                        subject = Some(fields::validate_subject(&raw)?);
                    }
                }
                Field::Body => {
                    if body.is_none() {
                        let raw: String = Input::with_theme(theme)
                            .with_prompt(question.prompt.clone())
                            .allow_empty(true)
                            .interact_text()?;
                        body = Some(fields::wrap_commit_body(&raw));
                    }
                }
                Field::BreakingChanges => {
                    if breaking_changes.is_none() {
                        let raw: String = Input::with_theme(theme)
                            .with_prompt(question.prompt.clone())
                            .allow_empty(true)
                            .interact_text()?;
                        breaking_changes = Some(raw);
                    }
                }
                Field::JiraIds => {
                    if jira_ids.is_none() {
                        let extractor = self.convention.extractor().clone();
                        let mut input = Input::with_theme(theme)
                            .with_prompt(question.prompt.clone())
                            .allow_empty(true);
                        if let Some(default) = &question.default {
                            input = input.default(default.clone());
                        }
                        let raw: String = input
                            .validate_with(move |answer: &String| {
                                fields::validate_jira_ids(&extractor, answer)
                                    .map(|_| ())
                                    .map_err(|e| e.to_string())
                            })
                            .interact_text()?;
                        jira_ids =
                            Some(fields::validate_jira_ids(self.convention.extractor(), &raw)?);
                    }
                }
            }
        }

        self.assemble(prefix, scope, subject, body, breaking_changes, jira_ids)
    }

    /// Build answers entirely from pre-filled fields, applying the same
    /// filters the prompts would.
    fn build_answers(&self) -> Result<Answers> {
        let prefix = self.prefix;
        let scope = match &self.scope {
            Some(raw) => Some(fields::validate_scope(raw)?),
            None => None,
        };
        let subject = match &self.subject {
            Some(raw) => Some(fields::validate_subject(raw)?),
            None => None,
        };
        let body = self.body.as_deref().map(fields::wrap_commit_body);
        let breaking_changes = self.breaking_changes.clone();

        // Fall back to the branch-inferred IDs, as the prompt default would.
        let raw_jira = self
            .jira_ids
            .clone()
            .or_else(|| self.convention.default_jira_answer());
        let jira_ids = match raw_jira {
            Some(raw) => Some(fields::validate_jira_ids(
                self.convention.extractor(),
                &raw,
            )?),
            None => None,
        };

        self.assemble(prefix, scope, subject, body, breaking_changes, jira_ids)
    }

    fn assemble(
        &self,
        prefix: Option<Prefix>,
        scope: Option<String>,
        subject: Option<String>,
        body: Option<String>,
        breaking_changes: Option<String>,
        jira_ids: Option<Vec<JiraId>>,
    ) -> Result<Answers> {
        let prefix = prefix.ok_or(ValidationError::RequiredField { field: "Prefix" })?;
        let subject = subject.ok_or(ValidationError::RequiredField { field: "Subject" })?;

        Ok(Answers::new(prefix, subject)
            .with_scope(scope.unwrap_or_default())
            .with_body(body.unwrap_or_default())
            .with_breaking_changes(breaking_changes.unwrap_or_default().trim().to_string())
            .with_jira_ids(jira_ids.unwrap_or_default()))
    }

    /// Check the assembled message against the engine before committing, so
    /// a skipped Jira answer on a ticket branch is caught here rather than
    /// at lint time.
    fn check_assembled_message(&self, message: &str) -> Result<()> {
        let engine = RuleEngine::new(self.convention.extractor())?;
        engine.validate_message(message, false).map_err(|e| {
            eprintln!("{} {}", style("✗").red().bold(), style(&e).red());
            CjError::Validation(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CommitBuilder {
        CommitBuilder::new(&CjConfig::default())
    }

    #[test]
    fn test_builder_prefill_and_assemble() {
        let b = builder()
            .with_prefix_str("feat")
            .unwrap()
            .with_scope("api")
            .with_subject("Add endpoint.")
            .with_jira_ids("AB-12");

        let answers = b.build_answers().unwrap();
        assert_eq!(answers.prefix, Prefix::Feat);
        assert_eq!(answers.scope, "api");
        // The subject filter strips the trailing period.
        assert_eq!(answers.subject, "Add endpoint");
        assert_eq!(answers.jira_ids.len(), 1);
    }

    #[test]
    fn test_builder_rejects_unknown_prefix() {
        assert!(builder().with_prefix_str("wip").is_err());
    }

    #[test]
    fn test_builder_requires_subject() {
        let b = builder().with_prefix_str("fix").unwrap();
        // No branch in the test environment supplies Jira IDs, so the only
        // failure can be the missing subject.
        let err = b.build_answers();
        assert!(err.is_err());
    }

    #[test]
    fn test_builder_rejects_invalid_scope() {
        let b = builder()
            .with_prefix_str("fix")
            .unwrap()
            .with_scope("Core")
            .with_subject("Repair");
        assert!(b.build_answers().is_err());
    }

    #[test]
    fn test_builder_wraps_body() {
        let long = "word ".repeat(40);
        let b = builder()
            .with_prefix_str("fix")
            .unwrap()
            .with_subject("Repair")
            .with_body(&long);
        let answers = b.build_answers().unwrap();
        assert!(answers.body.lines().count() > 1);
    }
}
