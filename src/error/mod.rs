// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cj application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cj operations.
#[derive(Error, Debug)]
pub enum CjError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Commit errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for CjError {
    fn from(err: dialoguer::Error) -> Self {
        CjError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Detached HEAD state")]
    DetachedHead,
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Validation-related errors.
///
/// Field validators fail fast with one of the per-field variants; batch
/// commit validation collects every per-commit failure into `BatchFailed`.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("{field} is a required field")]
    RequiredField { field: &'static str },

    #[error("Scope '{scope}' {reason}")]
    InvalidScope { scope: String, reason: &'static str },

    #[error("Jira ID(s) '{input}' not valid, should match '{pattern}' at least once")]
    InvalidJiraIds { input: String, pattern: String },

    #[error("Commit message is empty")]
    EmptyMessage,

    #[error("Subject '{subject}' does not match the commit schema '{pattern}'")]
    SchemaMismatch { subject: String, pattern: String },

    #[error("Commit subject spans multiple lines")]
    MultilineSubject,

    #[error("Missing Jira trailer(s): {}", .ids.join(", "))]
    MissingJiraTrailer { ids: Vec<String> },

    #[error("{failed} of {checked} commit(s) rejected:\n{report}")]
    BatchFailed {
        failed: usize,
        checked: usize,
        report: String,
    },
}

/// Commit-related errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Unknown commit prefix: '{prefix}'")]
    UnknownPrefix { prefix: String },
}

/// Result type alias for cj operations.
pub type Result<T> = std::result::Result<T, CjError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CjError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
