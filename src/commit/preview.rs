// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{style, Term};

use crate::convention::Answers;

/// Commit preview renderer.
pub struct CommitPreview<'a> {
    answers: &'a Answers,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for collected answers.
    pub fn new(answers: &'a Answers) -> Self {
        Self { answers }
    }

    /// Print the preview to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        let _ = self.render(&term);
    }

    /// Render the preview to a terminal.
    fn render(&self, term: &Term) -> std::io::Result<()> {
        // Box top
        term.write_line(&format!(
            "{}",
            style("┌─ Commit Preview ─────────────────────────────────────────────┐").dim()
        ))?;

        // Header line
        let header = self.answers.header();
        term.write_line(&format!(
            "{} {}{}",
            style("│").dim(),
            self.format_header(),
            self.padding(header.len())
        ))?;

        // Body if present
        if !self.answers.body.is_empty() {
            self.blank_line(term)?;
            for line in self.answers.body.lines() {
                self.dim_line(term, line)?;
            }
        }

        // Trailer block if present
        if !self.answers.breaking_changes.is_empty() || !self.answers.jira_ids.is_empty() {
            self.blank_line(term)?;
        }
        if !self.answers.breaking_changes.is_empty() {
            let line = format!("BREAKING CHANGES: {}", self.answers.breaking_changes);
            self.dim_line(term, &line)?;
        }
        for id in &self.answers.jira_ids {
            self.dim_line(term, &format!("Jira-Id: {}", id))?;
        }

        // Box bottom
        term.write_line(&format!(
            "{}",
            style("└──────────────────────────────────────────────────────────────┘").dim()
        ))?;

        Ok(())
    }

    fn blank_line(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!("{} {}", style("│").dim(), self.padding(0)))
    }

    fn dim_line(&self, term: &Term, line: &str) -> std::io::Result<()> {
        let visible_len = line.len().min(60);
        term.write_line(&format!(
            "{} {}{}",
            style("│").dim(),
            style(line).dim(),
            self.padding(visible_len)
        ))
    }

    /// Format the header with syntax highlighting.
    fn format_header(&self) -> String {
        let mut result = String::new();

        let prefix = self.answers.prefix.as_str();
        let prefix_style = match prefix {
            "feat" => style(prefix).green().bold(),
            "fix" => style(prefix).red().bold(),
            "docs" => style(prefix).blue().bold(),
            "style" => style(prefix).magenta().bold(),
            "refactor" => style(prefix).yellow().bold(),
            "perf" => style(prefix).cyan().bold(),
            _ => style(prefix).white().bold(),
        };
        result.push_str(&prefix_style.to_string());

        if !self.answers.scope.is_empty() {
            result.push_str(&format!("({})", style(&self.answers.scope).cyan()));
        }

        result.push_str(": ");
        result.push_str(&self.answers.subject);

        result
    }

    /// Create padding to align the right border.
    fn padding(&self, content_len: usize) -> String {
        let box_width: usize = 62;
        let padding_needed = box_width.saturating_sub(content_len + 2);
        format!("{}{}", " ".repeat(padding_needed), style("│").dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::Prefix;

    #[test]
    fn test_format_header() {
        let answers = Answers::new(Prefix::Feat, "add feature").with_scope("core");
        let preview = CommitPreview::new(&answers);
        let header = preview.format_header();
        assert!(header.contains("feat"));
        assert!(header.contains("core"));
        assert!(header.contains("add feature"));
    }

    #[test]
    fn test_format_header_without_scope() {
        let answers = Answers::new(Prefix::Chore, "tidy");
        let preview = CommitPreview::new(&answers);
        let header = preview.format_header();
        assert!(header.contains("chore"));
        assert!(!header.contains('('));
    }
}
