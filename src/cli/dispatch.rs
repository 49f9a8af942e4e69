// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::CjConfig;
use crate::convention::Convention;
use crate::error::{CjError, ConfigError, Result, ResultExt};

use super::args::{CheckArgs, Cli, Commands};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CjConfig::load_from(config_path)?
    } else {
        CjConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Commit(args) => run_commit(&cli, &config, args),
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Schema => run_schema(&config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the commit command.
fn run_commit(cli: &Cli, config: &CjConfig, args: super::args::CommitArgs) -> Result<()> {
    use crate::commit::CommitBuilder;

    tracing::debug!("Running commit command with args: {:?}", args);

    let mut builder = CommitBuilder::new(config);

    // Pre-fill values from arguments
    if let Some(ref prefix) = args.prefix {
        builder = builder.with_prefix_str(prefix)?;
    }
    if let Some(ref scope) = args.scope {
        builder = builder.with_scope(scope);
    }
    if let Some(ref message) = args.message {
        builder = builder.with_subject(message);
    }
    if let Some(ref body) = args.body {
        builder = builder.with_body(body);
    }
    if let Some(ref breaking) = args.breaking {
        builder = builder.with_breaking_changes(breaking);
    }
    if let Some(ref jira) = args.jira {
        builder = builder.with_jira_ids(jira);
    }

    // Stage all if requested
    if cli.all {
        crate::git::stage_all()?;
    }

    // Run the interactive builder or non-interactive commit
    if cli.is_ci_mode() {
        builder.commit_non_interactive(cli.dry_run, args.sign, args.amend)
    } else {
        builder.run_interactive(cli.dry_run, args.yes, args.sign, args.amend)
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CjConfig, args: CheckArgs) -> Result<()> {
    use crate::rules::RuleEngine;

    tracing::debug!("Running check command with args: {:?}", args);

    let convention = crate::convention::discover(config);
    let engine = RuleEngine::new(convention.extractor())?;

    // A raw message or message file validates directly, without git.
    let raw_message = match (&args.message, &args.file) {
        (Some(message), _) => Some(message.clone()),
        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
        (None, None) => None,
    };

    if let Some(message) = raw_message {
        return match engine.validate_message(&message, args.allow_empty_message) {
            Ok(()) => Ok(()),
            Err(e) => Err(CjError::Validation(e)),
        };
    }

    let commits = crate::git::get_commit_range(&args.target)?;
    let report = engine.check_commits(&commits, args.allow_empty_message);
    report.print(cli.format);

    match report.into_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Run the schema command.
fn run_schema(config: &CjConfig) -> Result<()> {
    let convention = crate::convention::discover(config);

    println!("{}", convention.schema());
    println!("\npattern: {}", convention.schema_pattern());
    println!("\nexample:\n\n{}", convention.example());

    Ok(())
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cj.toml");

    if config_path.exists() && !args.force {
        return Err(CjError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, crate::config::example_config())
        .context("Failed to write cj.toml")?;

    println!("✓ Created cj.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cj {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
