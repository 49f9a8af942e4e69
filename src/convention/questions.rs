// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit prefixes and the ordered prompt definitions.

use crate::error::CommitError;

/// The category tag prepended to a commit subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Fix,
    Feat,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
}

impl Prefix {
    /// Get the string representation of the prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Fix => "fix",
            Prefix::Feat => "feat",
            Prefix::Docs => "docs",
            Prefix::Style => "style",
            Prefix::Refactor => "refactor",
            Prefix::Perf => "perf",
            Prefix::Test => "test",
            Prefix::Build => "build",
            Prefix::Ci => "ci",
            Prefix::Chore => "chore",
        }
    }

    /// Get a description of the prefix.
    pub fn description(&self) -> &'static str {
        match self {
            Prefix::Fix => "Introduces a bug fix; the next release gets a patch version bump",
            Prefix::Feat => "Introduces a new feature; the next release gets a minor version bump",
            Prefix::Docs => "Changes documentation only",
            Prefix::Style => "Changes code formatting only: white-space, layout, etc.",
            Prefix::Refactor => "Changes code, but does not introduce a fix nor a feature",
            Prefix::Perf => "Introduces a performance improvement",
            Prefix::Test => "Adds one or more new tests, or fixes an existing one",
            Prefix::Build => "Changes the build system or external dependencies",
            Prefix::Ci => "Changes the CI configuration",
            Prefix::Chore => "Performs a routine task that isn't worth tracking",
        }
    }

    /// Get all prefixes, in prompt order.
    pub fn all() -> &'static [Prefix] {
        &[
            Prefix::Fix,
            Prefix::Feat,
            Prefix::Docs,
            Prefix::Style,
            Prefix::Refactor,
            Prefix::Perf,
            Prefix::Test,
            Prefix::Build,
            Prefix::Ci,
            Prefix::Chore,
        ]
    }
}

impl std::str::FromStr for Prefix {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fix" => Ok(Prefix::Fix),
            "feat" | "feature" => Ok(Prefix::Feat),
            "docs" | "doc" => Ok(Prefix::Docs),
            "style" => Ok(Prefix::Style),
            "refactor" => Ok(Prefix::Refactor),
            "perf" => Ok(Prefix::Perf),
            "test" | "tests" => Ok(Prefix::Test),
            "build" => Ok(Prefix::Build),
            "ci" => Ok(Prefix::Ci),
            "chore" => Ok(Prefix::Chore),
            _ => Err(CommitError::UnknownPrefix {
                prefix: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fields collected for one commit, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prefix,
    Scope,
    Subject,
    Body,
    BreakingChanges,
    JiraIds,
}

impl Field {
    /// The field's answer key.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Prefix => "prefix",
            Field::Scope => "scope",
            Field::Subject => "subject",
            Field::Body => "body",
            Field::BreakingChanges => "breaking_changes",
            Field::JiraIds => "jiraids",
        }
    }
}

/// A selectable choice in a list question.
#[derive(Debug, Clone)]
pub struct Choice {
    /// The value stored in the answer.
    pub value: &'static str,
    /// Help text shown next to the value.
    pub help: &'static str,
}

/// How a question is asked.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Pick one of a fixed list of choices.
    Select { choices: Vec<Choice> },
    /// Free-form text input.
    Input,
}

/// One prompt in the interactive flow.
#[derive(Debug, Clone)]
pub struct Question {
    /// Which answer field this prompt fills.
    pub field: Field,
    /// The prompt text.
    pub prompt: String,
    /// Pre-filled answer, if any.
    pub default: Option<String>,
    /// How the question is asked.
    pub kind: QuestionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_from_str() {
        assert_eq!("fix".parse::<Prefix>().unwrap(), Prefix::Fix);
        assert_eq!("feat".parse::<Prefix>().unwrap(), Prefix::Feat);
        assert_eq!("feature".parse::<Prefix>().unwrap(), Prefix::Feat);
        assert_eq!("CHORE".parse::<Prefix>().unwrap(), Prefix::Chore);
        assert!("wip".parse::<Prefix>().is_err());
    }

    #[test]
    fn test_prefix_display() {
        assert_eq!(Prefix::Refactor.to_string(), "refactor");
    }

    #[test]
    fn test_all_prefixes_have_descriptions() {
        for prefix in Prefix::all() {
            assert!(!prefix.description().is_empty());
        }
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::BreakingChanges.name(), "breaking_changes");
        assert_eq!(Field::JiraIds.name(), "jiraids");
    }
}
