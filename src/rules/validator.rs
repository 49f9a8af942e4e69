// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Batch validation result types.

use crate::cli::args::OutputFormat;
use crate::error::{CjError, ValidationError};
use crate::git::Commit;
use console::style;

/// A single rejected commit.
#[derive(Debug, Clone)]
pub struct CommitFailure {
    /// Full revision hash.
    pub rev: String,
    /// Author name.
    pub author: String,
    /// Author email.
    pub author_email: String,
    /// The offending commit message.
    pub message: String,
    /// What was wrong with it.
    pub error: ValidationError,
}

impl CommitFailure {
    /// Create a failure record for a commit.
    pub fn new(commit: &Commit, error: ValidationError) -> Self {
        Self {
            rev: commit.rev.clone(),
            author: commit.author.clone(),
            author_email: commit.author_email.clone(),
            message: commit.message.clone(),
            error,
        }
    }

    fn short_rev(&self) -> &str {
        &self.rev[..7.min(self.rev.len())]
    }

    fn summary_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Result of validating a batch of commits.
///
/// Every failure across the batch is collected so a single run surfaces all
/// bad commits, not just the first.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// How many commits were checked.
    pub checked: usize,
    /// The commits that failed validation.
    pub failures: Vec<CommitFailure>,
}

impl BatchReport {
    /// Create an empty report for a batch of the given size.
    pub fn new(checked: usize) -> Self {
        Self {
            checked,
            failures: Vec::new(),
        }
    }

    /// Check if the whole batch passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        for failure in &self.failures {
            println!(
                "{} {} {}",
                style("✗").red().bold(),
                style(failure.short_rev()).cyan(),
                failure.summary_line()
            );
            println!(
                "  {} <{}>",
                style(&failure.author).dim(),
                style(&failure.author_email).dim()
            );
            println!("  {}", style(&failure.error).red());
        }

        if self.is_valid() {
            println!(
                "{} {} commit(s) checked",
                style("✓").green().bold(),
                self.checked
            );
        } else {
            println!(
                "\n{} {} of {} commit(s) rejected",
                style("✗").red().bold(),
                self.failures.len(),
                self.checked
            );
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "checked": self.checked,
            "failed": self.failures.len(),
            "failures": self.failures.iter().map(|f| {
                serde_json::json!({
                    "rev": f.rev,
                    "author": f.author,
                    "author_email": f.author_email,
                    "message": f.message,
                    "error": f.error.to_string(),
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Render the failures as plain text for embedding in an error.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for failure in &self.failures {
            out.push_str(&format!(
                "{} ({} <{}>): {}\n  {}\n",
                failure.short_rev(),
                failure.author,
                failure.author_email,
                failure.summary_line(),
                failure.error
            ));
        }
        out.trim_end().to_string()
    }

    /// Convert a failed report into the combined error, if any.
    pub fn into_error(self) -> Option<CjError> {
        if self.is_valid() {
            return None;
        }
        let report = self.render_plain();
        Some(CjError::Validation(ValidationError::BatchFailed {
            failed: self.failures.len(),
            checked: self.checked,
            report,
        }))
    }
}
