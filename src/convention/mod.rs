// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message convention.
//!
//! This module defines the capability interface the rest of the application
//! programs against (prompt definitions, message assembly, schema, batch
//! validation) and its one implementation, [`JiraConvention`]. The host
//! obtains an implementation through the explicit [`discover`] factory with
//! the loaded configuration injected; nothing here reads global state.

pub mod fields;
pub mod message;
mod questions;
pub mod schema;

pub use message::Answers;
pub use questions::{Choice, Field, Prefix, Question, QuestionKind};

use crate::config::CjConfig;
use crate::error::Result;
use crate::git::Commit;
use crate::jira::JiraExtractor;
use crate::rules::RuleEngine;

/// The capability interface a commit convention provides to its host.
pub trait Convention {
    /// The ordered prompts of the interactive flow.
    fn questions(&self) -> Vec<Question>;

    /// Assemble the final commit message from validated answers.
    fn message(&self, answers: &Answers) -> String;

    /// Human-readable template of the message format.
    fn schema(&self) -> &'static str;

    /// The regular expression a commit subject must match.
    fn schema_pattern(&self) -> String;

    /// A documented example message.
    fn example(&self) -> &'static str;

    /// Validate a batch of commits, aggregating every failure into one
    /// combined error.
    fn validate_commits(&self, commits: &[Commit], allow_empty_message: bool) -> Result<()>;
}

/// The house convention: conventional-commit prefixes plus Jira trailers.
#[derive(Debug, Clone)]
pub struct JiraConvention {
    jira: JiraExtractor,
    hints: bool,
}

impl JiraConvention {
    /// Create the convention from the loaded configuration.
    pub fn new(config: &CjConfig) -> Self {
        Self {
            jira: JiraExtractor::from_config(config),
            hints: config.ui.hints,
        }
    }

    /// The Jira ID extractor configured for this convention.
    pub fn extractor(&self) -> &JiraExtractor {
        &self.jira
    }

    /// Default answer for the Jira IDs question, taken from the CI
    /// environment or the current branch.
    pub fn default_jira_answer(&self) -> Option<String> {
        let ids = self.jira.ids_from_env_or_branch()?;
        let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        Some(rendered.join(", "))
    }
}

impl Convention for JiraConvention {
    fn questions(&self) -> Vec<Question> {
        let choices = Prefix::all()
            .iter()
            .map(|p| Choice {
                value: p.as_str(),
                help: p.description(),
            })
            .collect();

        let scope_prompt = if self.hints {
            "Scope of the change in one lowercase word, e.g. 'api', 'mocks', 'ui', or 'config' \
             (press [enter] to skip)"
        } else {
            "Scope of the change in one lowercase word (press [enter] to skip)"
        };

        vec![
            Question {
                field: Field::Prefix,
                prompt: "Select the type of change you are committing".to_string(),
                default: None,
                kind: QuestionKind::Select { choices },
            },
            Question {
                field: Field::Scope,
                prompt: scope_prompt.to_string(),
                default: None,
                kind: QuestionKind::Input,
            },
            Question {
                field: Field::Subject,
                prompt: "Write a short, imperative summary of the code changes".to_string(),
                default: None,
                kind: QuestionKind::Input,
            },
            Question {
                field: Field::Body,
                prompt: "Commit body providing additional context of changes, if necessary \
                         (press [enter] to skip)"
                    .to_string(),
                default: None,
                kind: QuestionKind::Input,
            },
            Question {
                field: Field::BreakingChanges,
                prompt: "Short details about any breaking changes (press [enter] to skip)"
                    .to_string(),
                default: None,
                kind: QuestionKind::Input,
            },
            Question {
                field: Field::JiraIds,
                prompt: "What Jira ID(s) are associated with this change? (press [enter] to skip)"
                    .to_string(),
                default: self.default_jira_answer(),
                kind: QuestionKind::Input,
            },
        ]
    }

    fn message(&self, answers: &Answers) -> String {
        message::render(answers)
    }

    fn schema(&self) -> &'static str {
        schema::SCHEMA
    }

    fn schema_pattern(&self) -> String {
        schema::schema_pattern()
    }

    fn example(&self) -> &'static str {
        schema::EXAMPLE
    }

    fn validate_commits(&self, commits: &[Commit], allow_empty_message: bool) -> Result<()> {
        let engine = RuleEngine::new(&self.jira)?;
        engine.validate_commits(commits, allow_empty_message)
    }
}

/// Obtain the convention implementation for the loaded configuration.
pub fn discover(config: &CjConfig) -> JiraConvention {
    JiraConvention::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_cover_every_field_in_order() {
        let convention = discover(&CjConfig::default());
        let fields: Vec<Field> = convention.questions().iter().map(|q| q.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Prefix,
                Field::Scope,
                Field::Subject,
                Field::Body,
                Field::BreakingChanges,
                Field::JiraIds,
            ]
        );
    }

    #[test]
    fn test_prefix_question_lists_all_prefixes() {
        let convention = discover(&CjConfig::default());
        let questions = convention.questions();
        match &questions[0].kind {
            QuestionKind::Select { choices } => assert_eq!(choices.len(), Prefix::all().len()),
            QuestionKind::Input => panic!("prefix question should be a select"),
        }
    }

    #[test]
    fn test_scope_hint_follows_config() {
        let mut config = CjConfig::default();
        config.ui.hints = false;
        let convention = discover(&config);
        assert!(!convention.questions()[1].prompt.contains("e.g."));
    }

    #[test]
    fn test_example_matches_schema_pattern() {
        let convention = discover(&CjConfig::default());
        let re = regex::Regex::new(&format!("^(?:{})", convention.schema_pattern())).unwrap();
        assert!(re.is_match(convention.example()));
    }
}
