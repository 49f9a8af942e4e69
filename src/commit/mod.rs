// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for the interactive flow.

mod builder;
mod preview;

pub use builder::CommitBuilder;
pub use preview::CommitPreview;
