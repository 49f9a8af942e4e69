// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module validates commit messages against the convention's schema
//! and required Jira trailers, one commit at a time or in batches.

mod engine;
mod validator;

pub use engine::RuleEngine;
pub use validator::{BatchReport, CommitFailure};
