// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CJ - Conventional commit assistant with Jira ticket trailers
///
/// Creates and validates commit messages of the form
/// `prefix(scope): subject` with `BREAKING CHANGES:` and `Jira-Id:`
/// trailers.
#[derive(Parser, Debug)]
#[command(name = "cj")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit assistant with Jira ticket trailers", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to commit if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Stage modified and deleted files before committing
    #[arg(short, long, global = true)]
    pub all: bool,

    /// Enable strict CI mode (no prompts)
    #[arg(long, global = true)]
    pub ci: bool,

    /// Show what would be done without actually doing it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Disable all interactive prompts
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive commit creation (default command)
    Commit(CommitArgs),

    /// Validate commit messages
    Check(CheckArgs),

    /// Print the message schema, acceptance pattern, and an example
    Schema,

    /// Initialize cj configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Pre-fill the commit prefix (fix, feat, docs, ...)
    #[arg(short = 't', long = "type")]
    pub prefix: Option<String>,

    /// Pre-fill the scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Pre-fill the subject
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Pre-fill the body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Breaking-change details
    #[arg(long, value_name = "DETAILS")]
    pub breaking: Option<String>,

    /// Jira ID(s) for the trailer block (defaults to IDs found in the
    /// branch name)
    #[arg(short, long)]
    pub jira: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Sign the commit with GPG
    #[arg(long)]
    pub sign: bool,

    /// Amend the previous commit
    #[arg(long)]
    pub amend: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check a raw message instead of a commit
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Check a commit-message file (for use as a commit-msg hook)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Accept an empty message (an aborted editor session)
    #[arg(long)]
    pub allow_empty_message: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Check if running in CI mode (either explicit --ci or non-interactive).
    pub fn is_ci_mode(&self) -> bool {
        self.ci || self.non_interactive
    }

    /// Get the command to run, defaulting to commit.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Commit(CommitArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_commit() {
        let cli = Cli::parse_from(["cj"]);
        assert!(matches!(cli.effective_command(), Commands::Commit(_)));
    }

    #[test]
    fn test_check_defaults_to_head() {
        let cli = Cli::parse_from(["cj", "check"]);
        match cli.effective_command() {
            Commands::Check(args) => assert_eq!(args.target, "HEAD"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_commit_prefill_flags() {
        let cli = Cli::parse_from([
            "cj", "commit", "-t", "feat", "-s", "api", "-m", "Add endpoint", "-j", "AB-12",
        ]);
        match cli.effective_command() {
            Commands::Commit(args) => {
                assert_eq!(args.prefix.as_deref(), Some("feat"));
                assert_eq!(args.scope.as_deref(), Some("api"));
                assert_eq!(args.message.as_deref(), Some("Add endpoint"));
                assert_eq!(args.jira.as_deref(), Some("AB-12"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ci_mode() {
        let cli = Cli::parse_from(["cj", "--ci"]);
        assert!(cli.is_ci_mode());
        let cli = Cli::parse_from(["cj", "--non-interactive"]);
        assert!(cli.is_ci_mode());
    }
}
